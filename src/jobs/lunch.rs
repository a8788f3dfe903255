use crate::{
    config::Config,
    errors::AppError,
    services::{
        message::{compose, format_day, location_legend},
        partition::split_into_days,
        slack::Notifier,
        teams::assign_teams,
    },
    utils::dates::{check_window, format_date, next_weekday, RunWindow},
};
use chrono::NaiveDate;
use rand::Rng;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    MissingToken,
    InvalidConfig,
    NotStarted,
    Expired,
    Done,
}

impl RunOutcome {
    /// 只有 token 或設定有問題時才以 1 結束，發送失敗不影響
    pub fn status(self) -> u8 {
        match self {
            RunOutcome::MissingToken | RunOutcome::InvalidConfig => 1,
            RunOutcome::NotStarted | RunOutcome::Expired | RunOutcome::Done => 0,
        }
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        ExitCode::from(outcome.status())
    }
}

/// 一次完整的執行：檢查 token、設定與執行期間，分組後發送
///
/// `connect` 只有在通過所有檢查後才會被呼叫。
pub async fn run<F, N, R>(
    token: Option<String>,
    config: Result<Config, AppError>,
    today: NaiveDate,
    connect: F,
    rng: &mut R,
) -> RunOutcome
where
    F: FnOnce(String, &Config) -> N,
    N: Notifier,
    R: Rng + ?Sized,
{
    // token 沒設定就直接結束
    let token = match token {
        Some(token) if !token.is_empty() => token,
        _ => {
            tracing::error!("Error: {}", AppError::MissingToken);
            return RunOutcome::MissingToken;
        }
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return RunOutcome::InvalidConfig;
        }
    };

    match check_window(today, config.start_date, config.end_date) {
        RunWindow::NotStarted => {
            tracing::info!("Script has not started yet. Exiting.");
            return RunOutcome::NotStarted;
        }
        RunWindow::Expired => {
            tracing::info!("Script has expired. Exiting.");
            return RunOutcome::Expired;
        }
        RunWindow::Open => {}
    }

    tracing::info!("🔄 Generating group assignments...");
    let message = build_announcement(&config, today, rng);

    tracing::info!("🚀 Posting to Slack...");
    let notifier = connect(token, &config);
    announce(&notifier, &config.channel, &message).await;

    tracing::info!("✅ Done.");
    RunOutcome::Done
}

/// 分曜日、分隊，組成要發送的公告
pub fn build_announcement<R>(config: &Config, today: NaiveDate, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let assignment = split_into_days(&config.roster, &config.supervisor, &config.days, rng);

    let sections: Vec<String> = config
        .days
        .iter()
        .zip(&config.weekdays)
        .filter_map(|(label, weekday)| {
            let group = assignment.get(label)?;
            let date = format_date(next_weekday(today, *weekday));
            let teams = assign_teams(&group.members, config.num_teams, rng);
            tracing::debug!("{} ({}): {:?}", label, date, teams);
            Some(format_day(label, &date, &teams))
        })
        .collect();

    compose(&sections, location_legend(config.num_teams))
}

/// 發送失敗只記錄，不影響結束狀態
pub async fn announce<N>(notifier: &N, channel: &str, message: &str)
where
    N: Notifier + ?Sized,
{
    match notifier.post_message(channel, message).await {
        Ok(ts) => tracing::info!("✅ Successfully posted to Slack: {}", ts),
        Err(e) => tracing::error!("❌ Slack API Error: {}", e),
    }
}
