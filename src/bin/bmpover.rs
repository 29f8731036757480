use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;

/// Alpha-composite FOREGROUND over BACKGROUND and write the result as a 32-bit BM bitmap.
#[derive(Parser, Debug)]
#[command(name = "bmpover", version)]
struct Cli {
    /// Background image.
    background: PathBuf,

    /// Foreground image, placed at (--x, --y) on the background.
    foreground: PathBuf,

    /// Output image.
    output: PathBuf,

    /// Foreground column offset in background pixels.
    #[arg(long, default_value_t = 0)]
    x: u32,

    /// Foreground row offset in background pixels.
    #[arg(long, default_value_t = 0)]
    y: u32,

    /// Blend rows on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Thread count for --parallel (defaults to one per core).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Also write a PNG preview of the result.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Print the header fields of both inputs and the output.
    #[arg(long)]
    dump_header: bool,

    /// Print one pixel of each image at X,Y (repeatable).
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pixel: Vec<(u32, u32)>,

    /// With --dump-header, print headers and blend stats as JSON.
    #[arg(long, requires = "dump_header")]
    json: bool,

    /// Debug-level logging.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let bg = bmpover::read_file(&cli.background)
        .with_context(|| format!("load background '{}'", cli.background.display()))?;
    let fg = bmpover::read_file(&cli.foreground)
        .with_context(|| format!("load foreground '{}'", cli.foreground.display()))?;

    let opts = bmpover::BlendOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    let (out, stats) = bmpover::blend_with_opts(&bg, &fg, cli.x, cli.y, &opts)
        .with_context(|| "blend foreground over background")?;

    ensure_parent_dir(&cli.output)?;
    bmpover::write_file(&out, &cli.output)
        .with_context(|| format!("write '{}'", cli.output.display()))?;

    if let Some(png) = &cli.png {
        ensure_parent_dir(png)?;
        bmpover::save_png(&out, png)?;
        eprintln!("wrote {}", png.display());
    }

    if cli.dump_header {
        let headers = [
            ("background", &bg),
            ("foreground", &fg),
            ("output", &out),
        ];
        if cli.json {
            dump_json(&headers, &stats)?;
        } else {
            for (role, bmp) in headers {
                dump_header(role, bmp.header());
            }
            eprintln!("stats: {stats:?}");
        }
    }

    for &(x, y) in &cli.pixel {
        dump_pixel(x, y, &[("background", &bg), ("foreground", &fg), ("output", &out)]);
    }

    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn parse_point(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|e| format!("bad coordinate '{v}': {e}"))
    };
    Ok((coord(x)?, coord(y)?))
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn dump_header(role: &str, h: &bmpover::BmpHeader) {
    eprintln!("{role}:");
    eprintln!("  size:            {}x{}", h.width, h.height);
    eprintln!("  offset:          {}", h.data_offset);
    eprintln!("  header size:     {}", h.header_size);
    eprintln!("  bits per pixel:  {}", h.bits_per_pixel);
    eprintln!("  compression:     {:#x}", h.compression);
    eprintln!("  image size:      {}", h.image_size);
    eprintln!("  h resolution:    {:#x}", h.h_resolution);
    eprintln!("  v resolution:    {:#x}", h.v_resolution);
    eprintln!("  colors used:     {:#x}", h.colors_used);
    eprintln!("  colors required: {:#x}", h.colors_required);
    eprintln!("  red mask:        {:#010x}", h.red_mask);
    eprintln!("  green mask:      {:#010x}", h.green_mask);
    eprintln!("  blue mask:       {:#010x}", h.blue_mask);
    eprintln!("  alpha mask:      {:#010x}", h.alpha_mask);
}

fn dump_pixel(x: u32, y: u32, images: &[(&str, &bmpover::Bitmap)]) {
    for (role, bmp) in images {
        match bmp.pixel(x, y) {
            Some(px) => eprintln!(
                "{role} ({x}, {y}): a={} r={} g={} b={}",
                px.a, px.r, px.g, px.b
            ),
            None => eprintln!("{role} ({x}, {y}): outside {}x{}", bmp.width(), bmp.height()),
        }
    }
}

fn dump_json(
    headers: &[(&str, &bmpover::Bitmap)],
    stats: &bmpover::BlendStats,
) -> anyhow::Result<()> {
    let mut doc = serde_json::Map::new();
    for (role, bmp) in headers {
        let v = serde_json::to_value(bmp.header()).with_context(|| "serialize header")?;
        doc.insert((*role).to_string(), v);
    }
    doc.insert(
        "stats".to_string(),
        serde_json::to_value(stats).with_context(|| "serialize blend stats")?,
    );
    let text = serde_json::to_string_pretty(&serde_json::Value::Object(doc))
        .with_context(|| "format header json")?;
    println!("{text}");
    Ok(())
}
