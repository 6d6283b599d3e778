fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/pinch-viewer-icon.ico");
        res.compile().unwrap();
    }
}
