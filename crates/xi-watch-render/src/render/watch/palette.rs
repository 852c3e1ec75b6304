use super::*;

const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub(super) const WHITE: Rgb565 = Rgb565::WHITE;
pub(super) const RED: Rgb565 = rgb(161, 73, 67);
pub(super) const GOLD: Rgb565 = rgb(194, 148, 83);
pub(super) const DARK_GRAY: Rgb565 = rgb(30, 30, 30);
pub(super) const BASE: Rgb565 = rgb(107, 106, 105);
pub(super) const LIGHT_GRAY: Rgb565 = rgb(217, 217, 217);

/// `(background, text)` for a button or menu row.
pub(super) const fn button_colors(hovered: bool) -> (Rgb565, Rgb565) {
    if hovered { (GOLD, RED) } else { (RED, GOLD) }
}
