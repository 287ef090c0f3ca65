//! Sample upstream assets from `test-fixtures/svg`.

/// Regular `heart`: outline with a transparent sizing `<rect>`.
pub const HEART_REGULAR: &str = include_str!("../../../test-fixtures/svg/heart.svg");

/// Fill `heart`: `fill="currentColor"` on the root, no width.
pub const HEART_FILL: &str = include_str!("../../../test-fixtures/svg/heart-fill.svg");

/// Duotone `heart`: translucent fill layer plus stroked outline.
pub const HEART_DUOTONE: &str = include_str!("../../../test-fixtures/svg/heart-duotone.svg");

/// Bold `star`: explicit `width`/`height` on the root element.
pub const STAR_BOLD: &str = include_str!("../../../test-fixtures/svg/star-bold.svg");

/// Every fixture as `(weight directory, file name, body)`.
pub const ALL: &[(&str, &str, &str)] = &[
    ("regular", "heart.svg", HEART_REGULAR),
    ("fill", "heart-fill.svg", HEART_FILL),
    ("duotone", "heart-duotone.svg", HEART_DUOTONE),
    ("bold", "star-bold.svg", STAR_BOLD),
];
