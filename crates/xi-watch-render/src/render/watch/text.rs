use log::warn;
use u8g2_fonts::{
    Error as FontError, FontRenderer, fonts,
    types::{FontColor, HorizontalAlignment, VerticalPosition},
};

use super::*;

pub(super) const TIME_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_logisoso58_tn>().with_ignore_unknown_chars(true);
pub(super) const DATE_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_helvB24_tf>().with_ignore_unknown_chars(true);
pub(super) const BUTTON_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_helvB18_tf>().with_ignore_unknown_chars(true);
pub(super) const MENU_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_helvR18_tf>().with_ignore_unknown_chars(true);
pub(super) const NUMGEN_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_helvR18_tf>().with_ignore_unknown_chars(true);
pub(super) const NUMGEN_LARGE_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_helvB24_tf>().with_ignore_unknown_chars(true);
pub(super) const PLACEHOLDER_FONT: FontRenderer =
    FontRenderer::new::<fonts::u8g2_font_helvB14_tf>().with_ignore_unknown_chars(true);

pub(super) fn draw_text_centered<D>(
    target: &mut D,
    font: &FontRenderer,
    text: &str,
    center: UiPoint,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_aligned(target, font, text, center, VerticalPosition::Center, color)
}

/// Horizontally centered on `anchor.x`, top edge at `anchor.y`.
pub(super) fn draw_text_top_centered<D>(
    target: &mut D,
    font: &FontRenderer,
    text: &str,
    anchor: UiPoint,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_text_aligned(target, font, text, anchor, VerticalPosition::Top, color)
}

fn draw_text_aligned<D>(
    target: &mut D,
    font: &FontRenderer,
    text: &str,
    anchor: UiPoint,
    vertical: VerticalPosition,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match font.render_aligned(
        text,
        to_point(anchor),
        vertical,
        HorizontalAlignment::Center,
        FontColor::Transparent(color),
        target,
    ) {
        Ok(_) => Ok(()),
        Err(FontError::DisplayError(err)) => Err(err),
        Err(FontError::GlyphNotFound(glyph)) => {
            warn!("render: glyph {:?} missing in {:?}", glyph, text);
            Ok(())
        }
        Err(FontError::BackgroundColorNotSupported) => {
            warn!("render: font cannot draw background for {:?}", text);
            Ok(())
        }
    }
}

pub(super) fn draw_button<D>(
    target: &mut D,
    font: &FontRenderer,
    button: ButtonView<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (background, foreground) = button_colors(button.hovered);
    fill_rounded_rect(target, button.rect, background, BUTTON_RADIUS)?;
    draw_text_centered(target, font, button.label, button.rect.center(), foreground)
}

pub(super) const BUTTON_RADIUS: i32 = 10;
