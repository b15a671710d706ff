//! Embeds the build date shown by `tapesprocket --version`.

fn main() {
    let built = chrono::Utc::now().format("%Y-%m-%d");
    println!("cargo:rustc-env=BUILD_DATE={built}");
}
