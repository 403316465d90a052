use std::fs;
use std::path::Path;

/// Writes `body` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(path, body).expect("write");
}
