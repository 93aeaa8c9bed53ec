use crate::cli;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;
use std::env;
use std::path::PathBuf;

pub fn install(args: &cli::InstallArgs) -> Result<()> {
    println!("Building {} in release mode...", args.name);

    cmd!("cargo", "build", "--bin", &args.name, "--release").run()?;

    let install_dir = match &args.path {
        Some(path) => PathBuf::from(path),
        None => {
            let home =
                env::var("HOME").map_err(|_| eyre!("Could not determine home directory"))?;
            PathBuf::from(home).join(".local").join("bin")
        }
    };

    std::fs::create_dir_all(&install_dir)?;

    let source_path = PathBuf::from("target").join("release").join(&args.name);
    let dest_path = install_dir.join(&args.name);

    println!("Installing {} to {}", args.name, dest_path.display());
    std::fs::copy(&source_path, &dest_path)?;

    // Binaries land without the execute bit when copied through std::fs
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&dest_path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&dest_path, perms)?;
    }

    println!("Done.");

    Ok(())
}
