pub mod account;
pub mod case;
pub mod company;
pub mod contact;
pub mod dashboard;
pub mod news;
pub mod offering;
pub mod page;
pub mod page_view;
