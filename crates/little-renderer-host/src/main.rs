// Desktop: simulate one launch of the host (see `--help`)
fn main() {
    #[cfg(not(target_os = "android"))]
    little_renderer_host::run_native();
}
