mod login;
mod postgres;
mod register;
mod verify_token;
