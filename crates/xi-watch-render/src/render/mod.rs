pub mod watch;

use watch_fb::FrameBuffer;
use xi_watch_core::render::ScreenView;

pub trait FrameRenderer {
    fn render(&mut self, screen: ScreenView<'_>, frame: &mut FrameBuffer);
}
