//! Thickness mapping tables of the NACA 64 series, NASA TM X-3069.

/// Leading edge angle phi of the thickness mapping
pub(super) const PHI: [f64; 201] = [
    0.0, 0.01568, 0.03136, 0.04705, 0.06274, 0.07843, 0.09414, 0.10985, 0.12558, 0.14132, 0.15708,
    0.17274, 0.18842, 0.20411, 0.21981, 0.23552, 0.25124, 0.26697, 0.2827, 0.29843, 0.31416,
    0.32987, 0.34558, 0.36129, 0.377, 0.39271, 0.40842, 0.42412, 0.43983, 0.45553, 0.47124, 0.48695,
    0.50266, 0.51837, 0.53408, 0.54979, 0.56549, 0.5812, 0.59691, 0.61262, 0.62832, 0.64403,
    0.65975, 0.67546, 0.69117, 0.70688, 0.72258, 0.73829, 0.75399, 0.7697, 0.7854, 0.80111, 0.81683,
    0.83254, 0.84825, 0.86396, 0.87967, 0.89537, 0.91108, 0.92678, 0.94248, 0.9582, 0.97391,
    0.98962, 1.00533, 1.02104, 1.03675, 1.05245, 1.06816, 1.08386, 1.09956, 1.11528, 1.13099,
    1.14671, 1.16242, 1.17813, 1.19384, 1.20954, 1.22524, 1.24094, 1.25664, 1.27236, 1.28807,
    1.30378, 1.31949, 1.3352, 1.35091, 1.36661, 1.38232, 1.39802, 1.41372, 1.42942, 1.44512,
    1.46083, 1.47653, 1.49223, 1.50794, 1.52365, 1.53936, 1.55508, 1.5708, 1.58649, 1.60218,
    1.61788, 1.63358, 1.64929, 1.665, 1.68072, 1.69643, 1.71216, 1.72788, 1.74358, 1.75928, 1.77498,
    1.79068, 1.80639, 1.8221, 1.83781, 1.85353, 1.86924, 1.88496, 1.90066, 1.91637, 1.93207,
    1.94778, 1.96349, 1.9792, 1.99491, 2.01062, 2.02633, 2.04204, 2.05775, 2.07346, 2.08917,
    2.10488, 2.12059, 2.1363, 2.152, 2.16771, 2.18341, 2.19911, 2.21483, 2.23055, 2.24627, 2.26198,
    2.2777, 2.2934, 2.30911, 2.32481, 2.3405, 2.35619, 2.37192, 2.38765, 2.40337, 2.41909, 2.4348,
    2.45051, 2.46621, 2.4819, 2.49759, 2.51327, 2.52901, 2.54474, 2.56047, 2.57619, 2.5919, 2.6076,
    2.6233, 2.63899, 2.65467, 2.67035, 2.68609, 2.70182, 2.71755, 2.73327, 2.74898, 2.76468,
    2.78038, 2.79607, 2.81175, 2.82743, 2.84316, 2.85889, 2.87461, 2.89032, 2.90603, 2.92173,
    2.93743, 2.95313, 2.96882, 2.98451, 3.00023, 3.01594, 3.03165, 3.04736, 3.06307, 3.07878,
    3.09448, 3.11018, 3.12589, 3.14159,
];

/// Angle correction epsilon at each entry of [`PHI`]
pub(super) const EPSILON: [f64; 201] = [
    0.0, 0.00233, 0.00464, 0.00692, 0.00914, 0.01129, 0.01336, 0.01531, 0.01714, 0.01883, 0.02035,
    0.02169, 0.02287, 0.0239, 0.0248, 0.02557, 0.02624, 0.02682, 0.02731, 0.02774, 0.02812, 0.02846,
    0.02877, 0.02905, 0.02931, 0.02957, 0.02982, 0.03007, 0.03033, 0.0306, 0.0309, 0.03122, 0.03158,
    0.03196, 0.03236, 0.0328, 0.03326, 0.03375, 0.03427, 0.03481, 0.03538, 0.03598, 0.0366, 0.03725,
    0.03792, 0.03862, 0.03935, 0.0401, 0.04087, 0.04167, 0.0425, 0.04335, 0.04423, 0.04512, 0.04605,
    0.04699, 0.04796, 0.04896, 0.04998, 0.05102, 0.05208, 0.05317, 0.05428, 0.05541, 0.05657,
    0.05774, 0.05894, 0.06016, 0.0614, 0.06267, 0.06395, 0.06526, 0.06658, 0.06793, 0.06931, 0.0707,
    0.07213, 0.07357, 0.07505, 0.07655, 0.07808, 0.07964, 0.08123, 0.08284, 0.08447, 0.08613,
    0.0878, 0.08949, 0.09119, 0.0929, 0.09462, 0.09635, 0.09808, 0.0998, 0.10151, 0.10321, 0.10488,
    0.10653, 0.10815, 0.10972, 0.11125, 0.11273, 0.11415, 0.11553, 0.11686, 0.11814, 0.11938,
    0.12057, 0.12171, 0.12281, 0.12386, 0.12487, 0.12583, 0.12675, 0.12762, 0.12844, 0.12922,
    0.12994, 0.13062, 0.13125, 0.13182, 0.13234, 0.13281, 0.13322, 0.13358, 0.13389, 0.13414,
    0.13434, 0.13448, 0.13456, 0.13459, 0.13456, 0.13447, 0.13433, 0.13413, 0.13387, 0.13354,
    0.13316, 0.13272, 0.13222, 0.13166, 0.13104, 0.13035, 0.1296, 0.12879, 0.12792, 0.12698,
    0.12598, 0.12492, 0.1238, 0.12261, 0.12136, 0.12004, 0.11866, 0.11722, 0.11572, 0.11416,
    0.11254, 0.11087, 0.10914, 0.10735, 0.1055, 0.1036, 0.10164, 0.09963, 0.09757, 0.09545, 0.09328,
    0.09105, 0.08878, 0.08645, 0.08406, 0.08162, 0.07913, 0.0766, 0.07402, 0.07139, 0.06873,
    0.06603, 0.06329, 0.06052, 0.0577, 0.05486, 0.05198, 0.04907, 0.04614, 0.04318, 0.0402, 0.0372,
    0.03417, 0.03113, 0.02807, 0.02499, 0.02189, 0.01879, 0.01567, 0.01255, 0.00942, 0.00628,
    0.00314, 0.0,
];

/// Abscissas of the psi table
pub(super) const PSI_PHI: [f64; 201] = [
    0.0, 0.01573, 0.03145, 0.04717, 0.06289, 0.07861, 0.09432, 0.11002, 0.12572, 0.1414, 0.15708,
    0.1728, 0.18851, 0.20422, 0.21992, 0.23562, 0.25132, 0.26702, 0.28272, 0.29844, 0.31416,
    0.32984, 0.34553, 0.36122, 0.37693, 0.39264, 0.40836, 0.42408, 0.4398, 0.45552, 0.47124,
    0.48695, 0.50266, 0.51837, 0.53408, 0.54979, 0.56549, 0.5812, 0.59691, 0.61261, 0.62832,
    0.64403, 0.65973, 0.67544, 0.69115, 0.70686, 0.72257, 0.73827, 0.75398, 0.76969, 0.7854,
    0.80111, 0.81682, 0.83252, 0.84823, 0.86394, 0.87965, 0.89536, 0.91106, 0.92677, 0.94248,
    0.95819, 0.9739, 0.98961, 1.00531, 1.02102, 1.03673, 1.05244, 1.06815, 1.08385, 1.09956,
    1.11527, 1.13098, 1.14669, 1.1624, 1.17811, 1.19381, 1.20952, 1.22523, 1.24093, 1.25664,
    1.27236, 1.28808, 1.30379, 1.31951, 1.33522, 1.35093, 1.36663, 1.38233, 1.39803, 1.41372,
    1.42946, 1.44519, 1.46091, 1.47663, 1.49234, 1.50804, 1.52374, 1.53943, 1.55512, 1.5708,
    1.58653, 1.60226, 1.61798, 1.6337, 1.64941, 1.66511, 1.68081, 1.69651, 1.7122, 1.72788, 1.74361,
    1.75933, 1.77505, 1.79076, 1.80647, 1.82218, 1.83788, 1.85357, 1.86927, 1.88496, 1.90068,
    1.9164, 1.93211, 1.94782, 1.96353, 1.97924, 1.99494, 2.01064, 2.02634, 2.04204, 2.05775,
    2.07346, 2.08917, 2.10488, 2.12059, 2.13629, 2.152, 2.1677, 2.18341, 2.19911, 2.21481, 2.23051,
    2.24622, 2.26192, 2.27763, 2.29334, 2.30905, 2.32476, 2.34047, 2.35619, 2.37188, 2.38757,
    2.40327, 2.41897, 2.43468, 2.45039, 2.4661, 2.48182, 2.49754, 2.51327, 2.52895, 2.54464,
    2.56034, 2.57604, 2.59174, 2.60745, 2.62317, 2.63889, 2.65462, 2.67035, 2.68603, 2.70172,
    2.71741, 2.73311, 2.74882, 2.76453, 2.78024, 2.79597, 2.8117, 2.82743, 2.84312, 2.85881,
    2.87451, 2.89021, 2.90591, 2.92163, 2.93734, 2.95306, 2.96878, 2.98451, 3.00021, 3.01591,
    3.03162, 3.04732, 3.06303, 3.07874, 3.09445, 3.11016, 3.12588, 3.14159,
];

/// Mapped radial coordinate psi at each entry of [`PSI_PHI`]
pub(super) const PSI: [f64; 201] = [
    0.25269, 0.25265, 0.25251, 0.25227, 0.25193, 0.25147, 0.2509, 0.2502, 0.24937, 0.24841, 0.2473,
    0.24605, 0.24467, 0.24321, 0.2417, 0.24016, 0.23864, 0.23715, 0.23573, 0.23442, 0.23325,
    0.23224, 0.23138, 0.23066, 0.23006, 0.22956, 0.22916, 0.22884, 0.22858, 0.22836, 0.22818,
    0.22802, 0.22788, 0.22775, 0.22764, 0.22755, 0.22747, 0.2274, 0.22736, 0.22732, 0.2273, 0.22729,
    0.2273, 0.22731, 0.22733, 0.22736, 0.22739, 0.22742, 0.22745, 0.22748, 0.22751, 0.22753,
    0.22755, 0.22756, 0.22756, 0.22755, 0.22753, 0.22751, 0.22747, 0.22742, 0.22736, 0.22729,
    0.2272, 0.22709, 0.22697, 0.22683, 0.22668, 0.2265, 0.2263, 0.22608, 0.22584, 0.22557, 0.22528,
    0.22497, 0.22462, 0.22426, 0.22386, 0.22345, 0.223, 0.22253, 0.22203, 0.2215, 0.22094, 0.22034,
    0.21969, 0.21899, 0.21823, 0.21741, 0.21652, 0.21554, 0.21449, 0.21334, 0.21211, 0.2108, 0.2094,
    0.20794, 0.20641, 0.20481, 0.20315, 0.20143, 0.19966, 0.19784, 0.19596, 0.19405, 0.19209,
    0.19008, 0.18804, 0.18596, 0.18384, 0.18169, 0.1795, 0.17727, 0.17501, 0.17273, 0.17041,
    0.16806, 0.16569, 0.16329, 0.16087, 0.15843, 0.15596, 0.15347, 0.15095, 0.14842, 0.14587,
    0.1433, 0.14072, 0.13812, 0.13551, 0.13288, 0.13024, 0.12759, 0.12492, 0.12225, 0.11957,
    0.11688, 0.11418, 0.11149, 0.10878, 0.10608, 0.10338, 0.10068, 0.09798, 0.09529, 0.0926,
    0.08992, 0.08725, 0.08459, 0.08195, 0.07932, 0.07671, 0.07412, 0.07156, 0.06901, 0.06649,
    0.06399, 0.06152, 0.05908, 0.05667, 0.05428, 0.05193, 0.04962, 0.04734, 0.0451, 0.04289,
    0.04073, 0.0386, 0.03651, 0.03447, 0.03247, 0.03051, 0.02861, 0.02675, 0.02494, 0.02318,
    0.02148, 0.01983, 0.01825, 0.01672, 0.01525, 0.01385, 0.01252, 0.01125, 0.01006, 0.00892,
    0.00786, 0.00686, 0.00593, 0.00506, 0.00426, 0.00353, 0.00287, 0.00227, 0.00174, 0.00128,
    0.00089, 0.00057, 0.00032, 0.00014, 0.00004, 0.0,
];
