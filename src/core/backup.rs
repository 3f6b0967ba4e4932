use crate::core::register::Register;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the day file to `dest_file`, optionally zipping it.
    /// Returns the final backup path, or `None` if the user declined to
    /// overwrite an existing file.
    pub fn backup(register: &Register, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let src = register.day_file().path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check the day file exists
        if !src.is_file() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Attendance file not found: {}", src.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never copy the day file onto itself
        if dest.exists() && fs::canonicalize(dest)? == fs::canonicalize(src)? {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Backup destination is the attendance file itself: {}", dest.display()),
            )));
        }

        // 4️⃣ Existing destination → ask
        if dest.exists()
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                dest.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        // 5️⃣ Copy
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 6️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                } else {
                    info(format!("Removed uncompressed backup: {}", dest.display()));
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        register.audit(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup into a sibling `.zip`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attendance.csv".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
