//! Browser entry point built by Trunk with `--features csr`.

fn main() {
    #[cfg(feature = "csr")]
    instafront::mount();
}
