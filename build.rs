use std::process::Command;

fn main() {
    let version = Command::new("git")
        .arg("rev-parse")
        .arg("HEAD")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .unwrap_or_else(|| "Development build".into());

    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
