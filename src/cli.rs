use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use sched_application::prelude as flows;
use sched_core::{
    entities::{Id, Timestamp, Visibility},
    gateways::logger::LogScheduleLogger,
    repositories::EventRepo as _,
    usecases,
};
use sched_db_sqlite::Connections;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::{
    adapters::{ConfiguredProgrammeAdmins, LogUserMessages},
    config::Config,
    output, seed,
};

#[derive(Parser)]
#[command(author, version, about = "Programme schedules of events")]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    /// Overrides the database URL of the configuration
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all pending database migrations
    Migrate,
    /// Import an event with its rooms, views and programme from a JSON file
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Create an empty event
    CreateEvent { slug: String, name: String },
    /// Create a room of an event or a template room
    CreateRoom {
        /// Slug of the event, a template room is created if missing
        #[arg(long)]
        event: Option<String>,
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long, default_value_t = 0)]
        order: i32,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Create a view of an event
    CreateView {
        #[arg(long)]
        event: String,
        name: String,
        #[arg(long)]
        private: bool,
        #[arg(long, default_value_t = 0)]
        order: i32,
        /// RFC 3339 date time
        #[arg(long, value_parser = parse_timestamp)]
        start: Option<Timestamp>,
        /// RFC 3339 date time
        #[arg(long, value_parser = parse_timestamp)]
        end: Option<Timestamp>,
    },
    /// List the views of an event
    Views {
        #[arg(long)]
        event: String,
        /// Only list public views
        #[arg(long)]
        public: bool,
    },
    /// Replace the rooms of a view, given by their slugs in display order
    SetViewRooms {
        view: String,
        #[arg(value_name = "ROOM_SLUG")]
        rooms: Vec<String>,
    },
    /// Append a single room to a view
    AppendRoom { view: String, room: String },
    /// Copy all template rooms into an event
    InstantiateRooms {
        #[arg(long)]
        event: String,
    },
    /// Print the schedule of an event
    Schedule {
        #[arg(long)]
        event: String,
        /// Id of the view, all rooms are shown if missing
        #[arg(long)]
        view: Option<String>,
        #[arg(long)]
        include_unpublished: bool,
        /// Name of the user who is looking at the schedule
        #[arg(long, value_name = "USERNAME")]
        as_user: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

fn parse_timestamp(s: &str) -> Result<Timestamp, time::error::Parse> {
    OffsetDateTime::parse(s, &Rfc3339).map(Timestamp::from)
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sched_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Command::Migrate => {}
        Command::Import { file } => {
            let seed = seed::load_event_seed(&file)?;
            let import = seed::event_import_from_seed(seed)?;
            let event = flows::import_event(&connections, import)?;
            info!("Imported event {} ({})", event.name, event.slug);
        }
        Command::CreateEvent { slug, name } => {
            let event = flows::create_event(&connections, usecases::NewEvent { slug, name })?;
            println!("{}", event.id);
        }
        Command::CreateRoom {
            event,
            name,
            slug,
            order,
            notes,
        } => {
            let event_id = match event {
                Some(event_slug) => Some(event_by_slug(&connections, &event_slug)?),
                None => None,
            };
            let room = flows::create_room(
                &connections,
                usecases::NewRoom {
                    event_id,
                    name,
                    slug,
                    order,
                    notes,
                },
            )?;
            println!("{}", room.id);
        }
        Command::CreateView {
            event,
            name,
            private,
            order,
            start,
            end,
        } => {
            let event_id = event_by_slug(&connections, &event)?;
            let view = flows::create_view(
                &connections,
                usecases::NewView {
                    event_id,
                    name,
                    public: !private,
                    order,
                    start_time: start,
                    end_time: end,
                },
            )?;
            println!("{}", view.id);
        }
        Command::Views { event, public } => {
            let (_, views) = flows::views_of_event(&connections, &event, public)?;
            print!("{}", output::render_views(&views));
        }
        Command::SetViewRooms { view, rooms } => {
            let view_rooms =
                flows::replace_view_rooms_by_slugs(&connections, &Id::from(view), &rooms)?;
            info!("The view contains {} room(s)", view_rooms.len());
        }
        Command::AppendRoom { view, room } => {
            let view_room =
                flows::append_room_to_view(&connections, &Id::from(view), &Id::from(room))?;
            let event = usecases::event_of_view_room(&connections.shared()?, &view_room)?;
            info!(
                "Appended room to a view of {} with order {}",
                event.name, view_room.order
            );
        }
        Command::InstantiateRooms { event } => {
            let instantiated = flows::instantiate_rooms_for_event(&connections, &event)?;
            info!(
                "Created {} room(s), moved {} programme(s) and {} view room(s)",
                instantiated.created_rooms,
                instantiated.moved_programmes,
                instantiated.moved_view_rooms
            );
        }
        Command::Schedule {
            event,
            view,
            include_unpublished,
            as_user,
            json,
        } => {
            let view_id = view.map(Id::from);
            let options = usecases::ScheduleOptions {
                visibility: Visibility::from_include_unpublished(include_unpublished),
                display_offset: cfg.schedule.display_offset,
            };
            let admins = ConfiguredProgrammeAdmins::new(cfg.schedule.programme_admins);
            let viewer = as_user.as_deref().map(|username| usecases::Viewer {
                username,
                admin_check: &admins,
                messages: &LogUserMessages,
            });
            let schedule = flows::build_schedule(
                &connections,
                flows::ScheduleRequest {
                    event_slug: &event,
                    view_id: view_id.as_ref(),
                    options,
                },
                viewer.as_ref(),
                &LogScheduleLogger,
            )
            .map_err(|err| {
                if err.is_not_found() {
                    anyhow!("Event {event} or the requested view does not exist")
                } else {
                    err.into()
                }
            })?;
            if json {
                let schedule = output::schedule_to_json(schedule);
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print!(
                    "{}",
                    output::render_schedule_table(&schedule, cfg.schedule.display_offset)
                );
            }
        }
    }
    Ok(())
}

fn event_by_slug(connections: &Connections, slug: &str) -> Result<Id> {
    Ok(connections.shared()?.get_event_by_slug(slug)?.id)
}
