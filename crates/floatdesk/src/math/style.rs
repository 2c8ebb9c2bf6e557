//! Frame style constants

/// Window chrome metrics used for hit testing
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub resize_handle_size: f32,
    pub corner_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style matching the window stylesheet
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 28.0,
    resize_handle_size: 6.0,
    corner_handle_size: 12.0,
    button_size: 14.0,
    button_spacing: 8.0,
    button_margin: 10.0,
};
