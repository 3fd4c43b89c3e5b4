//! Thickness mapping tables of the NACA 66 series, NASA TM X-3069.

/// Leading edge angle phi of the thickness mapping
pub(super) const PHI: [f64; 201] = [
    0.0, 0.0157, 0.03139, 0.04709, 0.06279, 0.07849, 0.0942, 0.10991, 0.12563, 0.14135, 0.15708,
    0.17277, 0.18847, 0.20417, 0.21987, 0.23559, 0.2513, 0.26701, 0.28273, 0.29844, 0.31416,
    0.32987, 0.34558, 0.36129, 0.37699, 0.3927, 0.40841, 0.42411, 0.43982, 0.45553, 0.47124,
    0.48694, 0.50265, 0.51836, 0.53406, 0.54977, 0.56548, 0.58119, 0.5969, 0.61261, 0.62832,
    0.64403, 0.65974, 0.67545, 0.69116, 0.70686, 0.72257, 0.73828, 0.75399, 0.76969, 0.7854,
    0.80111, 0.81682, 0.83253, 0.84824, 0.86394, 0.87965, 0.89536, 0.91107, 0.92677, 0.94248,
    0.95819, 0.9739, 0.98961, 1.00532, 1.02103, 1.03673, 1.05244, 1.06815, 1.08385, 1.09956,
    1.11527, 1.13098, 1.14669, 1.1624, 1.17811, 1.19381, 1.20952, 1.22523, 1.24093, 1.25664,
    1.27235, 1.28806, 1.30377, 1.31948, 1.33519, 1.3509, 1.3666, 1.38231, 1.39802, 1.41372, 1.42943,
    1.44514, 1.46085, 1.47656, 1.49227, 1.50798, 1.52368, 1.53939, 1.5551, 1.5708, 1.58651, 1.60223,
    1.61794, 1.63365, 1.64936, 1.66507, 1.68077, 1.69648, 1.71218, 1.72788, 1.74359, 1.75931,
    1.77501, 1.79072, 1.80643, 1.82214, 1.83784, 1.85355, 1.86925, 1.88496, 1.90066, 1.91636,
    1.93206, 1.94776, 1.96347, 1.97918, 1.99489, 2.0106, 2.02632, 2.04204, 2.05773, 2.07343,
    2.08913, 2.10484, 2.12054, 2.13625, 2.15196, 2.16768, 2.18339, 2.19911, 2.21482, 2.23052,
    2.24623, 2.26194, 2.27765, 2.29336, 2.30906, 2.32477, 2.34048, 2.35619, 2.37191, 2.38762,
    2.40333, 2.41905, 2.43476, 2.45046, 2.46617, 2.48187, 2.49757, 2.51327, 2.529, 2.54473, 2.56045,
    2.57616, 2.59188, 2.60758, 2.62328, 2.63898, 2.65467, 2.67035, 2.68609, 2.70183, 2.71756,
    2.73328, 2.74899, 2.76469, 2.78039, 2.79608, 2.81176, 2.82743, 2.84317, 2.85891, 2.87463,
    2.89035, 2.90606, 2.92176, 2.93746, 2.95315, 2.96883, 2.98451, 3.00023, 3.01595, 3.03167,
    3.04738, 3.06309, 3.07879, 3.09449, 3.11019, 3.12589, 3.14159,
];

/// Angle correction epsilon at each entry of [`PHI`]
pub(super) const EPSILON: [f64; 201] = [
    0.0, 0.00145, 0.0029, 0.00433, 0.00574, 0.00712, 0.00847, 0.00978, 0.01105, 0.01225, 0.0134,
    0.01447, 0.01547, 0.01638, 0.01719, 0.01789, 0.01847, 0.01893, 0.01924, 0.0194, 0.0194, 0.01924,
    0.01893, 0.0185, 0.01799, 0.01741, 0.01679, 0.01616, 0.01556, 0.01499, 0.0145, 0.0141, 0.01379,
    0.01356, 0.0134, 0.01331, 0.01327, 0.01328, 0.01333, 0.0134, 0.0135, 0.01361, 0.01373, 0.01387,
    0.01402, 0.01419, 0.01438, 0.01458, 0.0148, 0.01504, 0.0153, 0.01558, 0.01588, 0.0162, 0.01654,
    0.01689, 0.01726, 0.01765, 0.01805, 0.01847, 0.0189, 0.01934, 0.0198, 0.02026, 0.02074, 0.02124,
    0.02174, 0.02226, 0.02279, 0.02334, 0.0239, 0.02447, 0.02506, 0.02566, 0.02627, 0.0269, 0.02754,
    0.02819, 0.02885, 0.02952, 0.0302, 0.03089, 0.0316, 0.03231, 0.03304, 0.03378, 0.03453, 0.0353,
    0.03608, 0.03688, 0.0377, 0.03853, 0.03938, 0.04025, 0.04113, 0.04202, 0.04293, 0.04386,
    0.04479, 0.04574, 0.0467, 0.04767, 0.04866, 0.04966, 0.05067, 0.05171, 0.05277, 0.05386,
    0.05498, 0.05612, 0.0573, 0.05851, 0.05976, 0.06103, 0.06231, 0.06362, 0.06493, 0.06625,
    0.06758, 0.06889, 0.0702, 0.07149, 0.07277, 0.07402, 0.07524, 0.07644, 0.0776, 0.07872, 0.07979,
    0.08082, 0.0818, 0.08272, 0.08359, 0.0844, 0.08515, 0.08585, 0.08649, 0.08708, 0.08761, 0.08808,
    0.0885, 0.08886, 0.08916, 0.08941, 0.08959, 0.08972, 0.08978, 0.08978, 0.08972, 0.08959, 0.0894,
    0.08914, 0.08882, 0.08843, 0.08797, 0.08745, 0.08687, 0.08622, 0.08551, 0.08474, 0.0839, 0.083,
    0.08203, 0.08101, 0.07991, 0.07875, 0.07752, 0.07622, 0.07485, 0.07341, 0.0719, 0.07031,
    0.06864, 0.06691, 0.0651, 0.06323, 0.06129, 0.05928, 0.05722, 0.05509, 0.0529, 0.05064, 0.04833,
    0.04596, 0.04354, 0.04108, 0.03856, 0.03601, 0.03341, 0.03077, 0.0281, 0.02539, 0.02264,
    0.01987, 0.01707, 0.01426, 0.01143, 0.00858, 0.00573, 0.00287, 0.0,
];

/// Abscissas of the psi table
pub(super) const PSI_PHI: [f64; 201] = [
    0.0, 0.01573, 0.03145, 0.04718, 0.0629, 0.07862, 0.09433, 0.11003, 0.12572, 0.14141, 0.15708,
    0.1728, 0.18851, 0.20422, 0.21992, 0.23562, 0.25131, 0.26701, 0.28272, 0.29844, 0.31416,
    0.32984, 0.34552, 0.36122, 0.37693, 0.39264, 0.40835, 0.42407, 0.4398, 0.45552, 0.47124,
    0.48696, 0.50267, 0.51838, 0.53409, 0.54979, 0.5655, 0.58121, 0.59691, 0.61262, 0.62832,
    0.64403, 0.65973, 0.67544, 0.69115, 0.70686, 0.72257, 0.73827, 0.75398, 0.76969, 0.7854,
    0.80111, 0.81682, 0.83252, 0.84823, 0.86394, 0.87965, 0.89536, 0.91106, 0.92677, 0.94248,
    0.95819, 0.9739, 0.9896, 1.00531, 1.02102, 1.03673, 1.05244, 1.06814, 1.08385, 1.09956, 1.11527,
    1.13098, 1.14668, 1.16239, 1.1781, 1.19381, 1.20952, 1.22522, 1.24093, 1.25664, 1.27235,
    1.28806, 1.30376, 1.31947, 1.33518, 1.35089, 1.3666, 1.3823, 1.39801, 1.41372, 1.42943, 1.44514,
    1.46085, 1.47655, 1.49226, 1.50797, 1.52368, 1.53939, 1.55509, 1.5708, 1.58651, 1.60222,
    1.61793, 1.63364, 1.64934, 1.66505, 1.68076, 1.69647, 1.71217, 1.72788, 1.7436, 1.75932,
    1.77504, 1.79075, 1.80647, 1.82217, 1.83788, 1.85358, 1.86927, 1.88496, 1.9007, 1.91642,
    1.93214, 1.94786, 1.96357, 1.97927, 1.99497, 2.01067, 2.02636, 2.04204, 2.05777, 2.07349,
    2.0892, 2.10492, 2.12062, 2.13633, 2.15203, 2.16773, 2.18342, 2.19911, 2.21483, 2.23055,
    2.24626, 2.26197, 2.27768, 2.29338, 2.30909, 2.32479, 2.34049, 2.35619, 2.3719, 2.38761,
    2.40331, 2.41902, 2.43473, 2.45043, 2.46614, 2.48185, 2.49756, 2.51327, 2.52897, 2.54467,
    2.56037, 2.57607, 2.59178, 2.60749, 2.6232, 2.63891, 2.65463, 2.67035, 2.68604, 2.70173,
    2.71742, 2.73312, 2.74882, 2.76453, 2.78025, 2.79597, 2.8117, 2.82743, 2.84311, 2.8588, 2.87449,
    2.89019, 2.9059, 2.92161, 2.93733, 2.95305, 2.96878, 2.98451, 3.0002, 3.0159, 3.0316, 3.04731,
    3.06302, 3.07873, 3.09444, 3.11016, 3.12587, 3.14159,
];

/// Mapped radial coordinate psi at each entry of [`PSI_PHI`]
pub(super) const PSI: [f64; 201] = [
    0.16457, 0.16455, 0.16449, 0.16437, 0.16416, 0.16386, 0.16345, 0.16292, 0.16223, 0.16139,
    0.16037, 0.15916, 0.15779, 0.15631, 0.15475, 0.15316, 0.15157, 0.15002, 0.14856, 0.14722,
    0.14604, 0.14506, 0.14427, 0.14364, 0.14316, 0.14281, 0.14257, 0.14242, 0.14235, 0.14233,
    0.14236, 0.14241, 0.14248, 0.14257, 0.14267, 0.1428, 0.14294, 0.1431, 0.14327, 0.14346, 0.14366,
    0.14387, 0.1441, 0.14433, 0.14457, 0.14481, 0.14506, 0.1453, 0.14554, 0.14578, 0.14601, 0.14623,
    0.14645, 0.14665, 0.14685, 0.14704, 0.14722, 0.1474, 0.14757, 0.14774, 0.1479, 0.14806, 0.14821,
    0.14835, 0.14849, 0.14862, 0.14875, 0.14886, 0.14897, 0.14908, 0.14917, 0.14925, 0.14933,
    0.1494, 0.14945, 0.1495, 0.14954, 0.14957, 0.14959, 0.14961, 0.14961, 0.1496, 0.14959, 0.14956,
    0.14953, 0.14948, 0.14943, 0.14936, 0.14928, 0.14918, 0.14908, 0.14896, 0.14883, 0.14869,
    0.14853, 0.14835, 0.14816, 0.14796, 0.14774, 0.1475, 0.14725, 0.14698, 0.14669, 0.14638,
    0.14606, 0.14571, 0.14533, 0.14494, 0.14452, 0.14407, 0.1436, 0.1431, 0.14256, 0.14198, 0.14135,
    0.14067, 0.13992, 0.1391, 0.1382, 0.13722, 0.13615, 0.13498, 0.13371, 0.13236, 0.13093, 0.12942,
    0.12786, 0.12623, 0.12456, 0.12284, 0.12108, 0.11929, 0.11746, 0.11561, 0.11373, 0.11182,
    0.10987, 0.1079, 0.1059, 0.10386, 0.1018, 0.0997, 0.09758, 0.09542, 0.09325, 0.09106, 0.08885,
    0.08662, 0.08439, 0.08214, 0.07989, 0.07763, 0.07537, 0.07311, 0.07085, 0.06859, 0.06633,
    0.06407, 0.06182, 0.05957, 0.05733, 0.0551, 0.05287, 0.05066, 0.04846, 0.04627, 0.04411,
    0.04196, 0.03983, 0.03773, 0.03566, 0.03362, 0.03161, 0.02964, 0.0277, 0.0258, 0.02395, 0.02215,
    0.02039, 0.01869, 0.01705, 0.01547, 0.01396, 0.0125, 0.01112, 0.00981, 0.00857, 0.0074, 0.00631,
    0.00531, 0.00439, 0.00356, 0.00281, 0.00216, 0.00159, 0.0011, 0.00071, 0.0004, 0.00018, 0.00004,
    0.0,
];
