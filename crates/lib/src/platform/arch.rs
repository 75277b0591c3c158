use crate::context::Bits;

/// Pointer width of the host, used as the default build bitness.
pub fn host_bits() -> Bits {
  if cfg!(target_pointer_width = "64") {
    Bits::X64
  } else {
    Bits::X86
  }
}
