use itertools::Itertools;

use crate::app_context::AppContext;
use crate::cli;
use crate::engine::{resolve_status, DraftContext, HeroStatus, SelectionGate};
use crate::models::draft_config::DraftConfig;
use crate::models::draft_room::DraftRoom;
use crate::models::draft_state::{ActionKind, Team};
use crate::models::hero::Hero;
use crate::opt::*;

pub mod hero_loader;
pub mod hero_matcher;
pub mod sequence;

const ROOM_ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ROOM_ID_LENGTH: usize = 8;

fn log(s: String) {
    log_if(s.as_str(), DbgFlg::Room);
}

pub async fn main(context: &AppContext) -> Res<()> {
    let heroes = hero_loader::load_hero_data()?;
    let config = DraftConfig::from_env();

    let room_id = match context.current_room_id() {
        Some(room_id) => {
            println!("Resuming room [{}]", room_id);
            room_id
        }
        None => create_new_room_id(context)?,
    };

    let turn_plan = sequence::build_sequence(&config);
    let room = DraftRoom::new(&room_id, config, turn_plan);
    let mut session = RoomSession::new(heroes, room);

    println!("{}", session.banner());
    println!("{}", session.turn_prompt());

    cli::main(&mut session).await?;

    if session.room.is_complete() {
        context.clear_current_room_id()?;
    }

    Ok(())
}

fn create_new_room_id(context: &AppContext) -> Res<String> {
    let room_id = nanoid::nanoid!(
        ROOM_ID_LENGTH,
        &ROOM_ID_ALPHABET.to_string().chars().collect::<Vec<char>>()
    );
    context.set_current_room_id(&room_id)?;

    log(format!("created room {}", room_id));
    Ok(room_id)
}

/// One live draft session: the catalog, the room being drafted, and the
/// commit gate between typed picks and the history.
pub struct RoomSession {
    pub heroes: Vec<Hero>,
    pub room: DraftRoom,
    gate: SelectionGate,
}

impl RoomSession {
    pub fn new(heroes: Vec<Hero>, room: DraftRoom) -> Self {
        RoomSession {
            heroes,
            room,
            gate: SelectionGate::new(),
        }
    }

    pub fn banner(&self) -> String {
        let config = &self.room.config;
        format!(
            "Room [{}] | {} draft | {} vs {}",
            self.room.room_id, config.mode, config.team1_name, config.team2_name
        )
    }

    /// Context of the turn being played, or the display-only view once the
    /// draft is complete.
    pub fn context(&self) -> DraftContext {
        match self.room.current_step() {
            Some(step) => DraftContext {
                current_team: step.team,
                current_action: Some(step.action),
                disabled: false,
            },
            None => DraftContext {
                current_team: self.room.config.starting_team,
                current_action: None,
                disabled: true,
            },
        }
    }

    pub fn turn_prompt(&self) -> String {
        match self.room.current_step() {
            Some(step) => format!(
                "Turn {}/{}: {} to {}",
                self.room.turn_number(),
                self.room.total_turns(),
                self.room.config.team_name(step.team),
                step.action
            ),
            None => "Draft is complete".to_string(),
        }
    }

    /// Renders the full hero grid with per-hero status markers, ordered by
    /// role then name.
    pub fn grid(&self) -> String {
        let ctx = self.context();
        let mode = self.room.config.mode;

        let mut grid = String::new();
        for hero in self
            .heroes
            .iter()
            .sorted_by_key(|hero| (hero.role.clone(), hero.name.clone()))
        {
            let status = resolve_status(&hero.name, &self.room.state, &ctx, mode);
            let line = format!(
                "[{}] {:24} {}",
                hero.role,
                hero.name,
                self.status_marker(status)
            ) + "\n";
            grid.push_str(&line);
        }

        grid
    }

    fn status_marker(&self, status: HeroStatus) -> String {
        match status {
            HeroStatus::Available => String::new(),
            HeroStatus::Banned => "BANNED".to_string(),
            HeroStatus::BannedByCurrentTeam => "BANNED BY YOU".to_string(),
            HeroStatus::Protected(team) => {
                format!("PROTECTED ({})", self.room.config.team_name(team))
            }
        }
    }

    /// Resolves typed input to a hero and proposes it for the current turn.
    /// Returns the confirmation prompt, or why the pick was refused.
    pub fn pick(&mut self, input: &str) -> Res<String> {
        if let Some(candidate) = self.gate.pending() {
            return Err(format!(
                "{} is awaiting confirmation; confirm or cancel first",
                candidate
            ));
        }

        let step = self
            .room
            .current_step()
            .ok_or("Draft is complete".to_string())?;
        let hero_name = hero_matcher::find_hero(&self.heroes, input)?.name.clone();

        let ctx = self.context();
        let mode = self.room.config.mode;
        if !self.gate.propose(&hero_name, &self.room.state, &ctx, mode) {
            let status = resolve_status(&hero_name, &self.room.state, &ctx, mode);
            return Err(format!(
                "{} cannot be picked: {}",
                hero_name,
                self.status_marker(status)
            ));
        }

        log(format!("proposed {} for {}", hero_name, step.team));
        Ok(format!(
            "{} {} by {} - confirm or cancel",
            step.action,
            hero_name,
            self.room.config.team_name(step.team)
        ))
    }

    /// Commits the pending candidate and folds it into the draft history.
    pub fn confirm(&mut self) -> Res<String> {
        let hero_name = self
            .gate
            .confirm()
            .ok_or("Nothing is awaiting confirmation".to_string())?;

        let step = self.room.apply_selection(&hero_name)?;
        log(format!("{} committed {} ({})", step.team, hero_name, step.action));

        let verb = match step.action {
            ActionKind::Ban => "banned",
            ActionKind::Protect => "protected",
        };
        let mut message = format!(
            "{} {} {}",
            self.room.config.team_name(step.team),
            verb,
            hero_name
        );

        if self.room.is_complete() {
            message.push_str("\nDraft is complete");
        } else {
            message.push('\n');
            message.push_str(&self.turn_prompt());
        }

        Ok(message)
    }

    /// Dismisses the pending candidate, if any.
    pub fn cancel(&mut self) -> String {
        match self.gate.pending() {
            Some(candidate) => {
                let message = format!("Cancelled {}", candidate);
                self.gate.cancel();
                message
            }
            None => "Nothing is awaiting confirmation".to_string(),
        }
    }

    /// Summary of the history so far: bans and each team's protections.
    pub fn state_summary(&self) -> String {
        let config = &self.room.config;

        let banned = self.room.state.banned_hero_names().sorted().join(", ");
        let mut summary = format!("Banned: {}", banned);
        for team in [Team::Team1, Team::Team2] {
            let protected = self.room.state.protected_heroes(team).sorted().join(", ");
            summary.push_str(&format!("\n{} protected: {}", config.team_name(team), protected));
        }

        summary
    }
}
