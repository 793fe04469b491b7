mod common;
mod progress;
mod routing;
