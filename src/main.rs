use std::io;

use log::debug;

fn main() {
    env_logger::init();

    debug!(
        "host: {} {}",
        std::env::consts::ARCH,
        std::env::consts::OS
    );

    let report = ism_probe::platform::probe();
    report.write_to(&mut io::stdout().lock()).unwrap();
}
