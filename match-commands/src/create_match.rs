use std::fmt;

use mt_match_state::adapters::{Gettable, Insertable};
use mt_match_state_types::{DBMatch, DBSeries, Match};

#[derive(Debug)]
pub enum CreateMatchError {
    NotEnoughPlayers,
    SeriesNotFound(String),
    PlayersNotInSeries {
        series_id: String,
        user_ids: Vec<String>,
    },
    Store(Box<dyn std::error::Error>),
}

impl fmt::Display for CreateMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateMatchError::NotEnoughPlayers => {
                write!(f, "a match needs at least one player")
            }
            CreateMatchError::SeriesNotFound(series_id) => {
                write!(f, "cannot find series \"{series_id}\"")
            }
            CreateMatchError::PlayersNotInSeries {
                series_id,
                user_ids,
            } => {
                write!(
                    f,
                    "some users \"{}\" are not in series \"{series_id}\"",
                    user_ids.join("\", \"")
                )
            }
            CreateMatchError::Store(err) => write!(f, "state error: {err}"),
        }
    }
}

impl std::error::Error for CreateMatchError {}

/// Creates a match record after checking that the referenced series
/// exists and that every requested player belongs to it.
pub struct CreateMatchCommand {
    match_data: Match,
}

impl CreateMatchCommand {
    /// Validates the request shape. Touches no state; the store is first
    /// contacted by [`CreateMatchCommand::execute`].
    pub fn new(match_data: Match) -> Result<Self, CreateMatchError> {
        if match_data.players.is_empty() {
            return Err(CreateMatchError::NotEnoughPlayers);
        }

        Ok(Self { match_data })
    }

    pub fn execute<S>(&self, state: &S) -> Result<DBMatch, CreateMatchError>
    where
        S: Gettable<DBSeries> + Insertable<Match>,
    {
        let series_id = &self.match_data.series_id;

        let series = state
            .get(series_id)
            .map_err(CreateMatchError::Store)?
            .ok_or_else(|| CreateMatchError::SeriesNotFound(series_id.clone()))?;

        let user_ids: Vec<String> = self
            .match_data
            .players
            .iter()
            .map(|player| player.user_id.clone())
            .collect();
        if !series.has_players(&user_ids) {
            return Err(CreateMatchError::PlayersNotInSeries {
                series_id: series_id.clone(),
                user_ids,
            });
        }

        let uuid = state
            .insert(self.match_data.clone())
            .map_err(CreateMatchError::Store)?;

        Ok(DBMatch {
            uuid,
            series_id: series_id.clone(),
            players: self.match_data.players.clone(),
        })
    }
}
