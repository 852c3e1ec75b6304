use super::*;

pub(super) fn draw_placeholder<D>(target: &mut D, message: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(DARK_GRAY)?;
    draw_text_centered(
        target,
        &PLACEHOLDER_FONT,
        message,
        screen_rect().center(),
        WHITE,
    )
}
