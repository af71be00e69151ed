mod tour;
mod user;
