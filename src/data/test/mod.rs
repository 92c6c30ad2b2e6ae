mod team;
mod user;
