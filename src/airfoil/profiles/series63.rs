//! Thickness mapping tables of the NACA 63 series, NASA TM X-3069.

/// Leading edge angle phi of the thickness mapping
pub(super) const PHI: [f64; 201] = [
    0.0, 0.01569, 0.03139, 0.04708, 0.06278, 0.07848, 0.09419, 0.1099, 0.12562, 0.14135, 0.15708,
    0.17277, 0.18846, 0.20416, 0.21987, 0.23558, 0.25129, 0.26701, 0.28273, 0.29844, 0.31416,
    0.32987, 0.34559, 0.3613, 0.377, 0.39271, 0.40842, 0.42412, 0.43983, 0.45553, 0.47124, 0.48695,
    0.50266, 0.51837, 0.53407, 0.54978, 0.56549, 0.5812, 0.59691, 0.61261, 0.62832, 0.64403,
    0.65974, 0.67545, 0.69116, 0.70687, 0.72257, 0.73828, 0.75399, 0.76969, 0.7854, 0.80111,
    0.81682, 0.83253, 0.84824, 0.86395, 0.87965, 0.89536, 0.91107, 0.92677, 0.94248, 0.95819,
    0.9739, 0.98961, 1.00532, 1.02103, 1.03673, 1.05244, 1.06815, 1.08385, 1.09956, 1.11527,
    1.13098, 1.14669, 1.1624, 1.17811, 1.19381, 1.20952, 1.22523, 1.24093, 1.25664, 1.27235,
    1.28806, 1.30376, 1.31947, 1.33518, 1.35089, 1.36659, 1.3823, 1.39801, 1.41372, 1.42942,
    1.44513, 1.46084, 1.47654, 1.49225, 1.50796, 1.52367, 1.53938, 1.55509, 1.5708, 1.5865, 1.60221,
    1.61791, 1.63362, 1.64933, 1.66504, 1.68075, 1.69646, 1.71217, 1.72788, 1.74358, 1.75929, 1.775,
    1.7907, 1.80641, 1.82212, 1.83783, 1.85354, 1.86925, 1.88496, 1.90067, 1.91637, 1.93208,
    1.94779, 1.9635, 1.97921, 1.99491, 2.01062, 2.02633, 2.04204, 2.05775, 2.07346, 2.08917,
    2.10487, 2.12058, 2.13629, 2.152, 2.1677, 2.18341, 2.19911, 2.21482, 2.23054, 2.24625, 2.26196,
    2.27767, 2.29338, 2.30908, 2.32479, 2.34049, 2.35619, 2.37191, 2.38762, 2.40334, 2.41905,
    2.43476, 2.45046, 2.46617, 2.48187, 2.49757, 2.51327, 2.52899, 2.5447, 2.56042, 2.57613,
    2.59184, 2.60754, 2.62325, 2.63895, 2.65465, 2.67035, 2.68607, 2.70178, 2.71749, 2.7332,
    2.74891, 2.76462, 2.78032, 2.79603, 2.81173, 2.82743, 2.84314, 2.85885, 2.87456, 2.89027,
    2.90598, 2.92169, 2.9374, 2.9531, 2.96881, 2.98451, 3.00022, 3.01593, 3.03164, 3.04735, 3.06305,
    3.07876, 3.09447, 3.11018, 3.12588, 3.14159,
];

/// Angle correction epsilon at each entry of [`PHI`]
pub(super) const EPSILON: [f64; 201] = [
    0.0, 0.00164, 0.00327, 0.00487, 0.00641, 0.00789, 0.00928, 0.01057, 0.01174, 0.01278, 0.01367,
    0.01439, 0.01497, 0.01542, 0.01576, 0.01601, 0.01619, 0.01632, 0.01642, 0.01651, 0.01661,
    0.01673, 0.01688, 0.01705, 0.01725, 0.01747, 0.01771, 0.01797, 0.01824, 0.01853, 0.01884,
    0.01916, 0.01949, 0.01984, 0.0202, 0.02058, 0.02097, 0.02137, 0.02179, 0.02223, 0.02268,
    0.02315, 0.02363, 0.02413, 0.02464, 0.02517, 0.02571, 0.02626, 0.02683, 0.02741, 0.02801,
    0.02862, 0.02924, 0.02988, 0.03052, 0.03118, 0.03185, 0.03253, 0.03323, 0.03393, 0.03465,
    0.03538, 0.03611, 0.03686, 0.03762, 0.03839, 0.03917, 0.03995, 0.04075, 0.04156, 0.04237,
    0.04319, 0.04402, 0.04486, 0.04571, 0.04657, 0.04743, 0.04831, 0.04919, 0.05008, 0.05098,
    0.05189, 0.0528, 0.05372, 0.05464, 0.05556, 0.05648, 0.0574, 0.05831, 0.05921, 0.06011, 0.06099,
    0.06187, 0.06273, 0.06357, 0.0644, 0.06522, 0.06602, 0.06681, 0.06757, 0.06832, 0.06905,
    0.06976, 0.07044, 0.07111, 0.07176, 0.07238, 0.07298, 0.07356, 0.07411, 0.07464, 0.07514,
    0.07562, 0.07607, 0.0765, 0.0769, 0.07727, 0.07761, 0.07793, 0.07822, 0.07848, 0.07871, 0.07891,
    0.07908, 0.07922, 0.07933, 0.07941, 0.07945, 0.07946, 0.07944, 0.07938, 0.07929, 0.07916, 0.079,
    0.0788, 0.07856, 0.07829, 0.07799, 0.07764, 0.07726, 0.07685, 0.0764, 0.07591, 0.07539, 0.07483,
    0.07423, 0.07359, 0.07293, 0.07222, 0.07148, 0.0707, 0.06989, 0.06904, 0.06815, 0.06723,
    0.06628, 0.06529, 0.06427, 0.06322, 0.06214, 0.06103, 0.05989, 0.05871, 0.05751, 0.05628,
    0.05502, 0.05374, 0.05243, 0.05109, 0.04973, 0.04834, 0.04693, 0.04549, 0.04404, 0.04256,
    0.04106, 0.03955, 0.03802, 0.03647, 0.03491, 0.03333, 0.03174, 0.03014, 0.02853, 0.0269,
    0.02527, 0.02363, 0.02198, 0.02032, 0.01865, 0.01698, 0.0153, 0.01361, 0.01192, 0.01023,
    0.00853, 0.00683, 0.00512, 0.00342, 0.00171, 0.0,
];

/// Abscissas of the psi table
pub(super) const PSI_PHI: [f64; 201] = [
    0.0, 0.01571, 0.03142, 0.04713, 0.06284, 0.07855, 0.09426, 0.10997, 0.12567, 0.14138, 0.15708,
    0.17279, 0.1885, 0.2042, 0.21991, 0.23561, 0.25132, 0.26703, 0.28274, 0.29845, 0.31416, 0.32986,
    0.34556, 0.36127, 0.37698, 0.39268, 0.40839, 0.42411, 0.43982, 0.45553, 0.47124, 0.48695,
    0.50266, 0.51837, 0.53408, 0.54978, 0.56549, 0.5812, 0.59691, 0.61261, 0.62832, 0.64403,
    0.65974, 0.67544, 0.69115, 0.70686, 0.72257, 0.73828, 0.75398, 0.76969, 0.7854, 0.80111,
    0.81682, 0.83252, 0.84823, 0.86394, 0.87965, 0.89536, 0.91106, 0.92677, 0.94248, 0.95819,
    0.9739, 0.98961, 1.00531, 1.02102, 1.03673, 1.05244, 1.06815, 1.08385, 1.09956, 1.11527,
    1.13098, 1.14669, 1.1624, 1.17811, 1.19381, 1.20952, 1.22523, 1.24093, 1.25664, 1.27235,
    1.28807, 1.30378, 1.31949, 1.3352, 1.3509, 1.36661, 1.38231, 1.39802, 1.41372, 1.42944, 1.44515,
    1.46086, 1.47657, 1.49228, 1.50799, 1.52369, 1.5394, 1.5551, 1.5708, 1.58652, 1.60223, 1.61794,
    1.63365, 1.64936, 1.66507, 1.68077, 1.69648, 1.71218, 1.72788, 1.74359, 1.75931, 1.77502,
    1.79073, 1.80644, 1.82214, 1.83785, 1.85355, 1.86926, 1.88496, 1.90067, 1.91638, 1.93209,
    1.9478, 1.96351, 1.97922, 1.99493, 2.01063, 2.02634, 2.04204, 2.05775, 2.07346, 2.08916,
    2.10487, 2.12058, 2.13628, 2.15199, 2.1677, 2.1834, 2.19911, 2.21481, 2.23052, 2.24623, 2.26193,
    2.27764, 2.29335, 2.30906, 2.32477, 2.34048, 2.35619, 2.37189, 2.38759, 2.4033, 2.419, 2.43471,
    2.45042, 2.46613, 2.48184, 2.49755, 2.51327, 2.52897, 2.54467, 2.56037, 2.57608, 2.59179,
    2.60749, 2.62321, 2.63892, 2.65463, 2.67035, 2.68605, 2.70175, 2.71745, 2.73316, 2.74887,
    2.76458, 2.78029, 2.796, 2.81171, 2.82743, 2.84313, 2.85884, 2.87454, 2.89025, 2.90596, 2.92167,
    2.93737, 2.95309, 2.9688, 2.98451, 3.00022, 3.01592, 3.03163, 3.04734, 3.06305, 3.07875,
    3.09446, 3.11017, 3.12588, 3.14159,
];

/// Mapped radial coordinate psi at each entry of [`PSI_PHI`]
pub(super) const PSI: [f64; 201] = [
    0.15066, 0.15058, 0.15035, 0.14999, 0.1495, 0.14891, 0.14823, 0.14748, 0.14668, 0.14583,
    0.14497, 0.1441, 0.14323, 0.14238, 0.14155, 0.14074, 0.13998, 0.13927, 0.13862, 0.13804,
    0.13753, 0.13711, 0.13676, 0.13648, 0.13627, 0.1361, 0.13598, 0.1359, 0.13584, 0.13579, 0.13576,
    0.13573, 0.1357, 0.13567, 0.13564, 0.13561, 0.13558, 0.13555, 0.13552, 0.1355, 0.13547, 0.13544,
    0.13542, 0.13539, 0.13536, 0.13533, 0.13529, 0.13525, 0.13521, 0.13516, 0.13511, 0.13505,
    0.13499, 0.13491, 0.13483, 0.13475, 0.13465, 0.13454, 0.13442, 0.13428, 0.13414, 0.13398,
    0.13381, 0.13363, 0.13343, 0.13321, 0.13299, 0.13275, 0.13249, 0.13222, 0.13194, 0.13164,
    0.13133, 0.131, 0.13065, 0.13028, 0.12988, 0.12947, 0.12903, 0.12857, 0.12808, 0.12756, 0.12702,
    0.12644, 0.12584, 0.12521, 0.12455, 0.12385, 0.12313, 0.12238, 0.1216, 0.12079, 0.11994,
    0.11907, 0.11817, 0.11724, 0.11628, 0.11529, 0.11428, 0.11324, 0.11218, 0.11109, 0.10998,
    0.10884, 0.10768, 0.1065, 0.1053, 0.10407, 0.10283, 0.10157, 0.10029, 0.09899, 0.09767, 0.09634,
    0.09499, 0.09363, 0.09224, 0.09085, 0.08944, 0.08801, 0.08657, 0.08512, 0.08365, 0.08217,
    0.08068, 0.07917, 0.07766, 0.07614, 0.07461, 0.07307, 0.07153, 0.06998, 0.06842, 0.06687,
    0.0653, 0.06374, 0.06217, 0.0606, 0.05904, 0.05747, 0.05591, 0.05435, 0.0528, 0.05125, 0.0497,
    0.04817, 0.04664, 0.04512, 0.04362, 0.04213, 0.04065, 0.03919, 0.03774, 0.03631, 0.0349, 0.0335,
    0.03213, 0.03077, 0.02943, 0.02811, 0.02682, 0.02555, 0.0243, 0.02308, 0.02188, 0.02071,
    0.01956, 0.01844, 0.01735, 0.0163, 0.01527, 0.01428, 0.01331, 0.01239, 0.01149, 0.01062,
    0.00979, 0.00899, 0.00823, 0.0075, 0.0068, 0.00614, 0.00551, 0.00491, 0.00435, 0.00382, 0.00332,
    0.00286, 0.00244, 0.00205, 0.00169, 0.00137, 0.00108, 0.00083, 0.00061, 0.00042, 0.00027,
    0.00015, 0.00007, 0.00002, 0.0,
];
