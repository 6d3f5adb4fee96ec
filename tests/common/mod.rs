#![allow(dead_code)]

use std::process::{Command, Output};

use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::{Container, GenericImage};

const MONGO_PORT: u16 = 27017;

pub fn mongo_image() -> GenericImage {
    GenericImage::new("mongo", "7.0")
        .with_exposed_port(ContainerPort::Tcp(MONGO_PORT))
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
}

pub fn mongo_uri(container: &Container<GenericImage>) -> String {
    let host_port = container
        .get_host_port_ipv4(MONGO_PORT)
        .expect("mapped port for 27017");

    format!("mongodb://127.0.0.1:{}/?directConnection=true", host_port)
}

/// The compiled binary with a clean environment: no dotenv file, no credentials.
pub fn listings_cmd() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_listings"));
    command
        .env("DOTENV_PATH", "/nonexistent/listings.env")
        .env("RUST_LOG", "info")
        .env_remove("DB_USER")
        .env_remove("DB_PASS")
        .env_remove("MONGODB_URI")
        .env_remove("LISTINGS_DATABASE")
        .env_remove("LISTINGS_COLLECTION")
        .env_remove("LISTINGS_LOG_FILE");
    command
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
