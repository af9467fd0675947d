//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "restack",
    about = "Resolve minified Weex stack traces to original source positions",
    after_help = "\
EXAMPLES:
    restack --shim-map jsfm.js.map --bundle-map app.js.map crash.txt
    adb logcat -d | restack --shim-map jsfm.js.map --bundle-map app.js.map"
)]
pub struct Args {
    /// Stack trace file (raw text, or a JSON string / array of frame
    /// strings); reads stdin if omitted
    #[arg(value_name = "STACK")]
    pub stack: Option<PathBuf>,

    /// Path to the runtime shim (jsfm) source map
    #[arg(long, value_name = "FILE")]
    pub shim_map: PathBuf,

    /// Path to the application bundle source map
    #[arg(long, value_name = "FILE")]
    pub bundle_map: PathBuf,

    /// Emit the resolved stack as a JSON array instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
