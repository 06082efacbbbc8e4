// Pipeline phases, in execution order
//
// Each phase reads what earlier phases left on the context and records
// produced or skipped artifacts. Numbered file names mirror the run order.

#[path = "01_scan.rs"]
pub mod scan;
#[path = "02_classify.rs"]
pub mod classify;
#[path = "03_dockerfile.rs"]
pub mod dockerfile;
#[path = "04_compose.rs"]
pub mod compose;
#[path = "05_ignore_readme.rs"]
pub mod ignore_readme;
