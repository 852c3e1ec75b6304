use super::*;

const ITEM_RADIUS: i32 = 10;

pub(super) fn draw_menu<D>(
    target: &mut D,
    chrome: &ChromeStyle,
    area: Rect,
    items: &[MenuItemView<'_>],
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_chrome(target, chrome, false)?;

    let Some(clip) = to_rectangle(area) else {
        return Ok(());
    };

    // Item rects are area-local; anything spilling past the area is cut off.
    let mut clipped = target.clipped(&clip);
    let mut local = clipped.translated(to_point(UiPoint::new(area.x, area.y)));

    for item in items {
        draw_menu_item(&mut local, item)?;
    }

    Ok(())
}

fn draw_menu_item<D>(target: &mut D, item: &MenuItemView<'_>) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (background, foreground) = button_colors(item.hovered);
    fill_rounded_rect(target, item.rect, background, ITEM_RADIUS)?;
    draw_text_centered(target, &MENU_FONT, item.label, item.rect.center(), foreground)
}
