use std::env;
use std::process::ExitCode;

use pubg_tracker::api::{Platform, PubgClient};
use pubg_tracker::config::Config;
use pubg_tracker::search::SearchSession;
use pubg_tracker::{display, logging};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let mut args = env::args().skip(1);
    let (Some(platform_arg), Some(player_name)) = (args.next(), args.next()) else {
        eprintln!("usage: pubg-tracker <kakao|steam|xbox|psn> <player-name>");
        return ExitCode::FAILURE;
    };

    let platform: Platform = match platform_arg.parse() {
        Ok(platform) => platform,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return ExitCode::FAILURE;
        }
    };

    let api = PubgClient::from_config(&config);
    let mut session = SearchSession::new(api, platform);

    session.change_platform(platform).await;
    session.submit(&player_name).await;

    if let Some(warning) = &session.state.warning {
        println!("warning: {warning}");
    }
    if let Some(player) = &session.state.player {
        print!("{}", display::player_summary(player));
    }
    if let Some(stats) = &session.state.stats {
        print!("{}", display::ranked_summary(stats));
    }
    if let Some(error) = &session.state.error {
        println!("{error}");
    }

    ExitCode::SUCCESS
}
