mod render;
mod text;

pub use render::draw_game;
pub use text::render_text;
