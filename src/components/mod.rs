pub mod charts;
pub mod chat;
pub mod icons;
pub mod layout;
pub mod marketing;
pub mod protected;
