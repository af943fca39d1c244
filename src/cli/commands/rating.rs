use crate::cli::parser::Commands;
use crate::core::rating::compute_rating;
use crate::errors::AppResult;
use crate::models::rating::RatingResult;
use crate::utils::formatting::stars;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Rating {
        on_time,
        late,
        json,
    } = cmd
    {
        let rating = compute_rating(*on_time, *late);

        if *json {
            println!("{}", serde_json::to_string_pretty(&rating)?);
        } else {
            println!(
                "{}  {}/{}",
                stars(rating.star_rating, RatingResult::MAX_STARS),
                rating.star_rating,
                RatingResult::MAX_STARS
            );
            println!("On time: {}%", rating.on_time_percent);
            println!("Late:    {}%", rating.late_percent);
        }
    }

    Ok(())
}
