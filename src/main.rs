//! Gaze-driven camera control demo binary.

use gazecam::{options::Options, Viewer};

fn main() {
    env_logger::init();

    // Optional argument: path to a TOML options file. A path that does not
    // exist yet is seeded with the defaults so it can be edited.
    let options = match std::env::args().nth(1) {
        Some(path) => {
            let path = std::path::Path::new(&path);
            if path.exists() {
                match Options::load(path) {
                    Ok(opts) => opts,
                    Err(e) => {
                        log::error!(
                            "failed to load options from {}: {e}",
                            path.display()
                        );
                        std::process::exit(1);
                    }
                }
            } else {
                let opts = Options::default();
                match opts.save(path) {
                    Ok(()) => log::info!(
                        "wrote default options to {}",
                        path.display()
                    ),
                    Err(e) => {
                        log::error!(
                            "failed to write default options to {}: {e}",
                            path.display()
                        );
                        std::process::exit(1);
                    }
                }
                opts
            }
        }
        None => Options::default(),
    };

    let viewer = Viewer::builder().with_options(options).build();
    if let Err(e) = viewer.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
