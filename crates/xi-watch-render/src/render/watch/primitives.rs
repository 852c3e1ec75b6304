use super::*;

pub(super) fn fill_rect<D>(target: &mut D, rect: Rect, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match to_rectangle(rect) {
        Some(area) => target.fill_solid(&area, color),
        None => Ok(()),
    }
}

pub(super) fn fill_disk<D>(
    target: &mut D,
    center: UiPoint,
    radius: i32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if radius <= 0 {
        return Ok(());
    }

    Circle::with_center(to_point(center), (radius * 2) as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Filled rounded rectangle built from a center rect, four edge rects, and
/// four corner disks of `radius`.
pub fn fill_rounded_rect<D>(
    target: &mut D,
    rect: Rect,
    color: Rgb565,
    radius: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let r = radius.max(0);
    let inner_w = rect.width - 2 * r;
    let inner_h = rect.height - 2 * r;

    fill_rect(target, rect.inset(r), color)?;

    fill_rect(target, Rect::new(rect.x + r, rect.y, inner_w, r), color)?;
    fill_rect(target, Rect::new(rect.x + r, rect.bottom() - r, inner_w, r), color)?;
    fill_rect(target, Rect::new(rect.x, rect.y + r, r, inner_h), color)?;
    fill_rect(target, Rect::new(rect.right() - r, rect.y + r, r, inner_h), color)?;

    fill_disk(target, UiPoint::new(rect.x + r, rect.y + r), r, color)?;
    fill_disk(target, UiPoint::new(rect.right() - r, rect.y + r), r, color)?;
    fill_disk(target, UiPoint::new(rect.x + r, rect.bottom() - r), r, color)?;
    fill_disk(target, UiPoint::new(rect.right() - r, rect.bottom() - r), r, color)
}

/// Ring made of `width` nested filled rounded rects, each one pixel smaller
/// with its radius reduced by one (floored at zero).
pub fn stroke_rounded_rect<D>(
    target: &mut D,
    rect: Rect,
    color: Rgb565,
    radius: i32,
    width: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for i in 0..width.max(0) {
        fill_rounded_rect(target, rect.inset(i), color, (radius - i).max(0))?;
    }
    Ok(())
}

pub(super) const fn screen_rect() -> Rect {
    Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Base fill plus the light inner panel; `with_border` adds the outer ring.
pub(super) fn draw_chrome<D>(
    target: &mut D,
    chrome: &ChromeStyle,
    with_border: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BASE)?;
    if with_border {
        stroke_rounded_rect(
            target,
            screen_rect(),
            BASE,
            chrome.outer_radius,
            chrome.border_width,
        )?;
    }
    fill_rounded_rect(target, chrome.inner_panel(), LIGHT_GRAY, chrome.inner_radius)
}
