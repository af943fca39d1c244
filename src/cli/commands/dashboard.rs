use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::screen::{Page, ScreenState, TripWidget};
use crate::errors::AppResult;
use crate::ui::messages::colors_enabled;
use crate::ui::render::{Frame, render_frame};
use crate::utils::date;

/// Render one frame of the dashboard and exit.
/// No attendance is shown: the log only exists inside `session`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { page, pod, expand } = cmd {
        let data = cfg.provider().load()?;

        let mut screen = ScreenState::new();
        screen.navigate(page.parse::<Page>()?);
        if *pod {
            screen.toggle_pod_menu();
        }
        if let Some(w) = expand {
            screen.toggle_widget(w.parse::<TripWidget>()?);
        }

        let summary = Core::new().build_summary(&data);

        print!(
            "{}",
            render_frame(&Frame {
                data: &data,
                summary: &summary,
                screen: &screen,
                events: &[],
                company_name: &cfg.company_name,
                map_url: &cfg.map_url,
                today: date::today(),
                color: colors_enabled(),
            })
        );
    }

    Ok(())
}
