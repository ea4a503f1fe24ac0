pub mod popup;
pub mod radar;
pub mod score_bar;
