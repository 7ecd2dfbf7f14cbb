use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "numlab",
    about = "Educational numerical methods: cubic roots, quadrature, square roots, tridiagonal and upwind solvers",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct NumlabCli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Real roots of x^3 + a*x^2 + b*x + c
    ///
    /// Examples:
    ///   numlab cubic -6 11 -6
    ///   echo "0 0 1" | numlab cubic
    #[command(allow_negative_numbers = true)]
    Cubic {
        /// Coefficients a b c; read from stdin when omitted
        #[arg(value_name = "COEFF", num_args = 0..=3)]
        coefficients: Vec<String>,
    },

    /// Integrate e^x with the trapezoidal and Simpson rules
    #[command(allow_negative_numbers = true)]
    Integrate {
        /// Lower bound
        #[arg(long = "from", default_value_t = 0.0)]
        from: f64,

        /// Upper bound
        #[arg(long = "to", default_value_t = 10.0)]
        to: f64,

        /// Sub-interval counts, repeatable
        #[arg(long = "intervals", default_values_t = [100usize, 1000])]
        intervals: Vec<usize>,
    },

    /// Square root by two fixed-point iteration schemes
    #[command(allow_negative_numbers = true)]
    Sqrt {
        /// Value whose square root is wanted; prompted when omitted
        #[arg(value_name = "VALUE")]
        value: Option<String>,

        /// Start value of the iteration; prompted when omitted
        #[arg(value_name = "START")]
        start: Option<String>,

        /// Stop once consecutive iterates differ by less than this
        #[arg(long = "eps", default_value_t = numlab::fixed_point::config::DEFAULT_EPS)]
        eps: f64,

        /// Iteration cap
        #[arg(long = "max-steps", default_value_t = numlab::fixed_point::config::DEFAULT_MAX_STEPS)]
        max_steps: usize,
    },

    /// Solve u'' = -2 on [0, 1] with the tridiagonal matrix algorithm
    #[command(allow_negative_numbers = true)]
    Tridiagonal {
        /// Number of equal intervals
        #[arg(long = "intervals", default_value_t = 1000)]
        intervals: usize,

        /// Boundary value u(0)
        #[arg(long = "left", default_value_t = 0.0)]
        left: f64,

        /// Boundary value u(1)
        #[arg(long = "right", default_value_t = 0.0)]
        right: f64,

        /// Print every node as `x approx exact`
        #[arg(long = "table", action = ArgAction::SetTrue)]
        table: bool,
    },

    /// Advect a step profile with Godunov's upwind scheme
    Advection {
        /// Spatial node counts, repeatable
        #[arg(long = "nodes", default_values_t = [11usize, 101])]
        nodes: Vec<usize>,

        /// Courant numbers, repeatable
        #[arg(long = "courant", default_values_t = [0.25f64, 0.5, 1.0, 1.25])]
        courant: Vec<f64>,

        /// Advection speeds, repeatable
        #[arg(long = "speed", default_values_t = [5.0f64])]
        speed: Vec<f64>,
    },
}
