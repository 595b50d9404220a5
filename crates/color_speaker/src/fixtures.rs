/// Known-good `(hex, rgb, hsl)` triples. Each one converts exactly in every direction.
pub(crate) fn good_color_sets() -> Vec<(&'static str, [i32; 3], [i32; 3])> {
    vec![
        ("#000000", [0, 0, 0], [0, 0, 0]),
        ("#FFFFFF", [255, 255, 255], [0, 0, 100]),
        ("#808080", [128, 128, 128], [0, 0, 50]),
        ("#FF0000", [255, 0, 0], [0, 100, 50]),
        ("#00FF00", [0, 255, 0], [120, 100, 50]),
        ("#0000FF", [0, 0, 255], [240, 100, 50]),
        ("#FFFF00", [255, 255, 0], [60, 100, 50]),
        ("#00FFFF", [0, 255, 255], [180, 100, 50]),
        ("#FF00FF", [255, 0, 255], [300, 100, 50]),
        ("#800000", [128, 0, 0], [0, 100, 25]),
        ("#008000", [0, 128, 0], [120, 100, 25]),
        ("#000080", [0, 0, 128], [240, 100, 25]),
        ("#000099", [0, 0, 153], [240, 100, 30]),
        ("#FF6347", [255, 99, 71], [9, 100, 64]),
        ("#4682B4", [70, 130, 180], [207, 44, 49]),
        ("#D2691E", [210, 105, 30], [25, 75, 47]),
        ("#663399", [102, 51, 153], [270, 50, 40]),
        ("#336699", [51, 102, 153], [210, 50, 40]),
        ("#CC3333", [204, 51, 51], [0, 60, 50]),
    ]
}
