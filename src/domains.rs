//! Built-in list of .io names to check

/// Checked in this order when no names are given on the command line
pub const BASE_DOMAINS: &[&str] = &[
    "github.io",
    "itch.io",
    "socket.io",
    "render.io",
    "fly.io",
    "deno.io",
    "railway.io",
    "linear.io",
    "supabase.io",
    "posthog.io",
    "tldswap.io",
    "quietforge.io",
];
