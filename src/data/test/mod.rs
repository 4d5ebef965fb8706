mod birthday;
mod interaction;
