use sea_query::Iden;

/// The `scores` table.
#[derive(Iden, Clone, Copy)]
pub enum Scores {
    Table,
    #[iden = "game_id"]
    GameId,
    #[iden = "date"]
    Date,
    #[iden = "home_team_name"]
    HomeTeamName,
    #[iden = "visiting_team_name"]
    VisitingTeamName,
    #[iden = "home_team_score"]
    HomeTeamScore,
    #[iden = "visiting_team_score"]
    VisitingTeamScore,
    #[iden = "game_status"]
    GameStatus,
    #[iden = "innings_played"]
    InningsPlayed,
    #[iden = "regulation_innings"]
    RegulationInnings,
    #[iden = "gametime"]
    Gametime,
    #[iden = "field"]
    Field,
    #[iden = "timezone"]
    Timezone,
    #[iden = "last_updated"]
    LastUpdated,
}

/// SQLite DDL for the `scores` table. The Postgres table is provisioned outside this crate.
pub const CREATE_SCORES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS scores (
    game_id TEXT PRIMARY KEY NOT NULL,
    date TEXT,
    home_team_name TEXT,
    visiting_team_name TEXT,
    home_team_score INTEGER,
    visiting_team_score INTEGER,
    game_status TEXT,
    innings_played INTEGER,
    regulation_innings INTEGER,
    gametime TEXT,
    field TEXT,
    timezone TEXT,
    last_updated TEXT NOT NULL
)
"#;
