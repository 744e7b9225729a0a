use colored::Colorize;

pub struct Theme {
    pub name: fn(&str) -> String,
    pub number: fn(&str) -> String,
    pub location: fn(&str) -> String,
    pub tag: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub low_risk: fn(&str) -> String,
    pub medium_risk: fn(&str) -> String,
    pub high_risk: fn(&str) -> String,
    pub failed: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "classic" | "" => Self::classic(),
            "night" => Self::night(),
            "paper" => Self::paper(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::classic()
            }
        }
    }

    fn classic() -> Self {
        Self {
            name: |s| s.bright_white().bold().to_string(),
            number: |s| s.normal().to_string(),
            location: |s| s.cyan().to_string(),
            tag: |s| s.bright_black().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            low_risk: |s| s.green().to_string(),
            medium_risk: |s| s.yellow().to_string(),
            high_risk: |s| s.red().bold().to_string(),
            failed: |s| s.red().italic().to_string(),
        }
    }

    fn night() -> Self {
        Self {
            name: |s| s.bright_magenta().bold().to_string(),
            number: |s| s.bright_cyan().to_string(),
            location: |s| s.bright_blue().to_string(),
            tag: |s| s.magenta().italic().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            low_risk: |s| s.bright_green().to_string(),
            medium_risk: |s| s.bright_yellow().to_string(),
            high_risk: |s| s.bright_red().bold().to_string(),
            failed: |s| s.bright_red().italic().to_string(),
        }
    }

    fn paper() -> Self {
        Self {
            name: |s| s.black().bold().to_string(),
            number: |s| s.black().to_string(),
            location: |s| s.blue().to_string(),
            tag: |s| s.bright_black().italic().to_string(),
            line: |s| s.bright_black().to_string(),
            low_risk: |s| s.green().bold().to_string(),
            medium_risk: |s| s.yellow().bold().to_string(),
            high_risk: |s| s.red().bold().underline().to_string(),
            failed: |s| s.red().to_string(),
        }
    }
}
