//! Bar command construction.

use super::{Arg, LaunchSpec, StdinSource};
use crate::entity::{Bar, DockPosition};

/// Bar binary used when none is given on the command line.
pub const DEFAULT_BAR_BINARY: &str = "/usr/bin/bar";

/// Which configured dock position receives the bar binary's `-b` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockFlag {
    /// `-b` for bars left at the default `Top`. barrc has always built the
    /// command this way even though `-b` asks the bar to dock at the bottom,
    /// so `Position=Top` and `Position=Bottom` come out inverted.
    #[default]
    Top,
    /// `-b` only for bars configured with `Position=Bottom`.
    Bottom,
}

impl DockFlag {
    fn applies_to(self, dock: DockPosition) -> bool {
        match self {
            DockFlag::Top => dock == DockPosition::Top,
            DockFlag::Bottom => dock == DockPosition::Bottom,
        }
    }
}

/// Bar flags in their fixed order: dock position, force dock, permanent,
/// geometry, fonts, underline width, background, foreground.
pub fn bar_args(bar: &Bar, dock_flag: DockFlag) -> Vec<Arg> {
    let mut args = Vec::new();

    if dock_flag.applies_to(bar.dock) {
        args.push(Arg::plain("-b"));
    }
    if bar.force_dock {
        args.push(Arg::plain("-d"));
    }
    if bar.permanent {
        args.push(Arg::plain("-p"));
    }

    if let Some(geometry) = &bar.geometry {
        args.push(Arg::plain("-g"));
        args.push(Arg::plain(geometry));
    }

    let fonts = bar.fonts();
    if !fonts.is_empty() {
        args.push(Arg::plain("-f"));
        args.push(Arg::Quoted(fonts.into_iter().map(str::to_string).collect()));
    }

    if let Some(width) = bar.effective_underline_width() {
        args.push(Arg::plain("-u"));
        args.push(Arg::plain(width.to_string()));
    }

    if let Some(background) = &bar.background {
        args.push(Arg::plain("-B"));
        args.push(Arg::quoted(background));
    }
    if let Some(foreground) = &bar.foreground {
        args.push(Arg::plain("-F"));
        args.push(Arg::quoted(foreground));
    }

    args
}

/// Build the invocation for a bar. A configured FIFO becomes the bar's
/// stdin.
pub fn build_bar_command(bar: &Bar, binary: &str, dock_flag: DockFlag) -> LaunchSpec {
    LaunchSpec {
        program: binary.to_string(),
        args: bar_args(bar, dock_flag),
        stdin: match &bar.fifo {
            Some(fifo) => StdinSource::Fifo(fifo.clone()),
            None => StdinSource::Null,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn line(bar: &Bar) -> String {
        build_bar_command(bar, DEFAULT_BAR_BINARY, DockFlag::default()).command_line()
    }

    fn line_with_bottom_flag(bar: &Bar) -> String {
        build_bar_command(bar, DEFAULT_BAR_BINARY, DockFlag::Bottom).command_line()
    }

    #[test]
    fn test_default_bar_gets_dock_and_permanent_flags() {
        let bar = Bar::new(1);
        assert_eq!(line(&bar), "/usr/bin/bar -b -p");
        assert_eq!(
            build_bar_command(&bar, "bar", DockFlag::default()).stdin,
            StdinSource::Null
        );
    }

    #[test]
    fn test_historical_dock_flag_is_inverted() {
        // Top-docked bars get -b and bottom-docked bars do not.
        let mut bar = Bar::new(1);
        bar.permanent = false;
        assert_eq!(bar_args(&bar, DockFlag::Top), vec![Arg::plain("-b")]);

        bar.dock = DockPosition::Bottom;
        assert!(bar_args(&bar, DockFlag::Top).is_empty());
    }

    #[test]
    fn test_bottom_dock_flag_follows_position() {
        let mut bar = Bar::new(1);
        bar.permanent = false;
        assert!(bar_args(&bar, DockFlag::Bottom).is_empty());

        bar.dock = DockPosition::Bottom;
        assert_eq!(bar_args(&bar, DockFlag::Bottom), vec![Arg::plain("-b")]);
        assert_eq!(line_with_bottom_flag(&bar), "/usr/bin/bar -b");
    }

    #[test]
    fn test_full_bar_golden_command() {
        let mut bar = Bar::new(1);
        bar.dock = DockPosition::Bottom;
        bar.force_dock = true;
        bar.geometry = Some("1920x20+0+0".to_string());
        bar.font_primary = Some("Sans-10".to_string());
        bar.font_secondary = Some("Mono-8".to_string());
        bar.underline_width = 2;
        bar.background = Some("#1D1F21".to_string());
        bar.foreground = Some("#C5C8C6".to_string());
        bar.fifo = Some(PathBuf::from("/tmp/panel-fifo"));

        assert_eq!(
            line_with_bottom_flag(&bar),
            "cat /tmp/panel-fifo | /usr/bin/bar -b -d -p -g 1920x20+0+0 \
             -f 'Sans-10', 'Mono-8' -u 2 -B '#1D1F21' -F '#C5C8C6'"
        );
        assert_eq!(
            line(&bar),
            "cat /tmp/panel-fifo | /usr/bin/bar -d -p -g 1920x20+0+0 \
             -f 'Sans-10', 'Mono-8' -u 2 -B '#1D1F21' -F '#C5C8C6'"
        );

        let spec = build_bar_command(&bar, DEFAULT_BAR_BINARY, DockFlag::Bottom);
        assert_eq!(
            spec.argv(),
            vec![
                "-b",
                "-d",
                "-p",
                "-g",
                "1920x20+0+0",
                "-f",
                "Sans-10, Mono-8",
                "-u",
                "2",
                "-B",
                "#1D1F21",
                "-F",
                "#C5C8C6",
            ]
        );
        assert_eq!(
            spec.stdin,
            StdinSource::Fifo(PathBuf::from("/tmp/panel-fifo"))
        );
    }

    #[test]
    fn test_underline_width_one_is_omitted() {
        let mut bar = Bar::new(1);
        bar.underline_width = 1;
        assert!(!bar_args(&bar, DockFlag::Top).contains(&Arg::plain("-u")));

        bar.underline_width = 2;
        let args = bar_args(&bar, DockFlag::Top);
        let pos = args.iter().position(|a| *a == Arg::plain("-u")).unwrap();
        assert_eq!(args[pos + 1], Arg::plain("2"));
    }

    #[test]
    fn test_primary_font_alone_is_quoted() {
        let mut bar = Bar::new(1);
        bar.permanent = false;
        bar.dock = DockPosition::Bottom;
        bar.font_primary = Some("Sans-10".to_string());
        assert_eq!(line(&bar), "/usr/bin/bar -f 'Sans-10'");

        bar.font_secondary = Some("Mono-8".to_string());
        assert_eq!(line(&bar), "/usr/bin/bar -f 'Sans-10', 'Mono-8'");
    }

    #[test]
    fn test_secondary_font_without_primary_is_ignored() {
        let mut bar = Bar::new(1);
        bar.font_secondary = Some("Mono-8".to_string());
        assert!(!bar_args(&bar, DockFlag::Top).contains(&Arg::plain("-f")));
    }

    #[test]
    fn test_order_is_independent_of_assignment_order() {
        let mut a = Bar::new(1);
        a.foreground = Some("#FFFFFF".to_string());
        a.geometry = Some("10x10".to_string());
        a.force_dock = true;

        let mut b = Bar::new(1);
        b.force_dock = true;
        b.geometry = Some("10x10".to_string());
        b.foreground = Some("#FFFFFF".to_string());

        assert_eq!(bar_args(&a, DockFlag::Top), bar_args(&b, DockFlag::Top));
        assert_eq!(line(&a), "/usr/bin/bar -b -d -p -g 10x10 -F '#FFFFFF'");
    }

    #[test]
    fn test_custom_binary() {
        let spec = build_bar_command(&Bar::new(1), "lemonbar", DockFlag::Top);
        assert_eq!(spec.program, "lemonbar");
        assert_eq!(spec.command_line(), "lemonbar -b -p");
    }
}
