use clap::Parser;
use dtx::{
  Sink,
  calendar::{
    CalendarDate, EpochMillis, EpochSeconds, LocalDateTime, OffsetDateTime, Temporal, UtcOffset,
    WallTime,
  },
  sink::TokioSink,
};

pub(crate) async fn init() -> dtx::Result<()> {
  let args = Cli::parse();
  let temporal = match args.commands {
    Commands::DateTime(elem) => date_time(&elem)?,
    Commands::Millis { millis } => Temporal::from(EpochMillis(millis)),
    Commands::Now {} => Temporal::from(EpochSeconds::now()),
    Commands::Seconds { nanoseconds, seconds } => {
      Temporal::from(EpochSeconds::new(seconds, nanoseconds))
    }
  };
  tracing::debug!(?temporal, "writing to stdout");
  let mut sink = TokioSink::new(tokio::io::stdout());
  temporal.write_to(&mut sink).await?;
  sink.push('\n').await?;
  sink.flush().await
}

fn date_time(elem: &DateTime) -> dtx::Result<Temporal> {
  let date = CalendarDate::from_ymd(elem.year, elem.month, elem.day)?;
  let time = WallTime::from_hms_ns(elem.hour, elem.minute, elem.second, elem.nanoseconds)?;
  let local = LocalDateTime::new(date, time);
  Ok(match elem.offset {
    None => Temporal::from(local),
    Some(seconds) => Temporal::from(OffsetDateTime::new(local, UtcOffset::from_seconds(seconds)?)),
  })
}

/// Prints date and time values in RFC 3339
#[derive(Debug, clap::Parser)]
#[command(author, long_about = None, name = "dtx", version)]
struct Cli {
  #[command(subcommand)]
  commands: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
  /// Calendar date and clock time, optionally at a fixed offset from UTC
  DateTime(DateTime),
  /// Milliseconds since the UNIX epoch
  Millis {
    /// Number of milliseconds, can be negative
    #[arg(allow_negative_numbers = true)]
    millis: i64,
  },
  /// Current system time in UTC
  Now {},
  /// Seconds since the UNIX epoch
  Seconds {
    /// Nanoseconds of the last second
    #[arg(default_value_t = 0, short = 'n')]
    nanoseconds: u32,
    /// Number of seconds, can be negative
    #[arg(allow_negative_numbers = true)]
    seconds: i64,
  },
}

/// Date and time
#[derive(Debug, clap::Args)]
struct DateTime {
  /// Year, non-positive values are written as `1 - year`
  #[arg(allow_negative_numbers = true)]
  year: i32,
  /// Month of the year
  month: u8,
  /// Day of the month
  day: u8,
  /// Hour of the day
  hour: u8,
  /// Minute of the hour
  minute: u8,
  /// Second of the minute
  second: u8,
  /// Nanoseconds of the second
  #[arg(default_value_t = 0, short = 'n')]
  nanoseconds: u32,
  /// Distance from UTC in seconds. When absent, no offset is written
  #[arg(allow_negative_numbers = true, short = 'o')]
  offset: Option<i32>,
}
