use guide_common::config::Config;
use guide_core::sections::Section;

use crate::terminal::print;

pub fn list(cfg: &Config) {
    print::header("sections", cfg.quiet);

    let key_width: usize = Section::ALL
        .iter()
        .map(|section| section.name().len())
        .max()
        .unwrap_or_default();

    for (i, section) in Section::ALL.iter().enumerate() {
        let key: String = format!("{} {}", i + 1, section.name());
        print::aligned_line(&key, section.summary(), key_width + 3);
    }

    print::end_of_program(cfg.quiet);
}
