mod alert;
mod certificate;
mod observer;
mod reports;
mod setting;
mod station;
mod training;
mod user;
