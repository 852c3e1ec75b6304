use core::fmt::Write as _;

use heapless::String;

use super::*;

const NUMBER_TEXT_BYTES: usize = 24;

#[derive(Clone, Copy, Debug)]
pub(super) struct SliderView {
    pub track: Rect,
    pub knob: UiPoint,
    pub knob_radius: i32,
    pub value: i32,
    pub label_offset: i32,
}

pub(super) fn draw_slider_screen<D>(
    target: &mut D,
    chrome: &ChromeStyle,
    slider: SliderView,
    generate: ButtonView<'_>,
    back: ButtonView<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_chrome(target, chrome, false)?;

    fill_rect(target, slider.track, WHITE)?;
    fill_disk(target, slider.knob, slider.knob_radius, GOLD)?;

    let mut label: String<NUMBER_TEXT_BYTES> = String::new();
    let _ = write!(label, "Max: {}", slider.value);
    draw_text_top_centered(
        target,
        &NUMGEN_FONT,
        &label,
        UiPoint::new(slider.knob.x, slider.knob.y - slider.label_offset),
        WHITE,
    )?;

    draw_button(target, &NUMGEN_FONT, generate)?;
    draw_button(target, &NUMGEN_FONT, back)
}

pub(super) fn draw_result_screen<D>(
    target: &mut D,
    chrome: &ChromeStyle,
    number: i32,
    back: ButtonView<'_>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_chrome(target, chrome, false)?;

    let mut text: String<NUMBER_TEXT_BYTES> = String::new();
    let _ = write!(text, "Number: {}", number);
    draw_text_centered(
        target,
        &NUMGEN_LARGE_FONT,
        &text,
        screen_rect().center(),
        GOLD,
    )?;

    draw_button(target, &NUMGEN_FONT, back)
}
