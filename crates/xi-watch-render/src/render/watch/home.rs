use super::*;

const TIME_RAISE: i32 = 40;
const DATE_DROP: i32 = 10;

pub(super) fn draw_home<D>(
    target: &mut D,
    chrome: &ChromeStyle,
    time: &str,
    date: &str,
    enter: ButtonView<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_chrome(target, chrome, true)?;

    let center = screen_rect().center();
    draw_text_centered(
        target,
        &TIME_FONT,
        time,
        UiPoint::new(center.x, center.y - TIME_RAISE),
        GOLD,
    )?;
    draw_text_centered(
        target,
        &DATE_FONT,
        date,
        UiPoint::new(center.x, center.y + DATE_DROP),
        GOLD,
    )?;

    draw_button(target, &BUTTON_FONT, enter)
}
