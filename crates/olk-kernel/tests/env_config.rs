//! Environment overrides for the executor.
//!
//! Kept in its own test binary with a single test, so no other thread reads
//! the environment while it is being changed.

use olk_kernel::{DEFAULT_MIN_CHUNK, Kernel, KernelConfig};
use olk_kernel::config::{ENV_MIN_CHUNK, ENV_THREADS};

fn set(name: &str, value: &str) {
    // SAFETY: this binary runs a single test, nothing else touches the environment.
    unsafe { std::env::set_var(name, value) }
}

fn clear(name: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(name) }
}

#[test]
fn test_from_env() {
    clear(ENV_THREADS);
    clear(ENV_MIN_CHUNK);
    assert_eq!(KernelConfig::from_env(), KernelConfig::default());

    set(ENV_THREADS, "2");
    set(ENV_MIN_CHUNK, " 512 ");
    let config = KernelConfig::from_env();
    assert_eq!(config.threads, Some(2));
    assert_eq!(config.min_chunk, 512);

    let kernel = Kernel::from_env().unwrap();
    assert_eq!(kernel.threads(), 2);
    assert_eq!(kernel.config().min_chunk, 512);

    // Unparseable values fall back to the defaults
    set(ENV_THREADS, "many");
    set(ENV_MIN_CHUNK, "-4");
    assert_eq!(KernelConfig::from_env(), KernelConfig::default());

    // Parseable but unusable values surface when the kernel is built
    set(ENV_THREADS, "0");
    clear(ENV_MIN_CHUNK);
    let config = KernelConfig::from_env();
    assert_eq!(config.threads, Some(0));
    assert_eq!(config.min_chunk, DEFAULT_MIN_CHUNK);
    assert!(Kernel::from_env().unwrap_err().is_parameter_error());

    set(ENV_THREADS, "1");
    assert_eq!(Kernel::from_env().unwrap().threads(), 1);

    clear(ENV_THREADS);
}
