//! Host platform detection.

pub mod arch;
pub mod os;

pub use arch::host_bits;
pub use os::Os;

/// Raw identifier of the host operating system as reported by std.
pub fn host_os_name() -> &'static str {
  std::env::consts::OS
}
