/*
MIT License

Copyright (c) 2026 npcount-rs developers
*/

//! Main executable for npcount-rs

fn main() -> anyhow::Result<()> {
    env_logger::init();
    npcount_rs::cli::run()
}
