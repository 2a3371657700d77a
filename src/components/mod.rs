pub mod app;
pub mod card_carousel;
pub mod gesture_readout;
pub mod pinch_view;
pub mod settings_panel;
pub mod swipe_pad;
