use std::path::PathBuf;
use std::process::ExitCode;

use hermes_core::{
    AmountCalculation, AmountType, OrderMode, OrderRequest, Side, SymbolPair, check_precision,
    parse_decimal,
};
use hermes_gateway::ExchangeConfig;
use hermes_runner::{OrderError, TradingSession, init_logging};
use log::{error, info};

fn print_help() {
    eprintln!(
        r#"Hermes Order - place a single limit order on a Binance-compatible exchange

USAGE:
    hermes-order <COMMAND> [OPTIONS]

COMMANDS:
    place               Limit order at the best bid (buy) or ask (sell)
    low-buy             Buy 20% below the bid
    high-sell           Sell 20% above the ask
    custom              Limit order at --price

OPTIONS:
    --pair <BASE/QUOTE>         Market, e.g. BTC/USDT
    --symbol <SYMBOL>           Exchange symbol, e.g. BTCUSDT (instead of --pair)
    --side <buy|sell>           Order side (default: buy)
    --amount <AMOUNT>           Order amount
    --quote                     Amount is in the quote asset (default: base)
    --fraction <F>              Size as fraction 0..1 of the free balance (needs --pair)
    --precision <N>             Quantity decimal places (default: 8)
    --price <PRICE>             Limit price for `custom`
    --price-precision <N>       Price decimal places (default: 2)
    --live                      Place a live order (default: test order only)
    --config <PATH>             Load exchange configuration from JSON file
    --help                      Print this help message

ENVIRONMENT VARIABLES:
    API_KEY, SECRET             Exchange credentials (also read from .env)
    HERMES_CONFIG               Configuration file (same as --config)
    HERMES_BASE_URL             Exchange REST endpoint
    HERMES_TIMEOUT_MS           Request timeout in milliseconds
    RUST_LOG                    Log level filter

EXAMPLES:
    # Validate a 0.001 BTC buy at the current bid
    hermes-order place --pair BTC/USDT --amount 0.001 --precision 5

    # Live sell of 25 USDT worth, 20% above the ask
    hermes-order high-sell --pair BTC/USDT --amount 25 --quote --live
"#
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place,
    LowBuy,
    HighSell,
    Custom,
}

#[derive(Debug)]
struct Args {
    command: Command,
    pair: Option<SymbolPair>,
    symbol: Option<String>,
    side: Side,
    amount: Option<String>,
    amount_type: AmountType,
    fraction: Option<String>,
    precision: u32,
    price: Option<String>,
    price_precision: u32,
    mode: OrderMode,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Option<Args>, String> {
    let mut command = None;
    let mut parsed = Args {
        command: Command::Place,
        pair: None,
        symbol: None,
        side: Side::Buy,
        amount: None,
        amount_type: AmountType::FixedBase,
        fraction: None,
        precision: 8,
        price: None,
        price_precision: 2,
        mode: OrderMode::Test,
        config_path: None,
    };

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        let mut value = || {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{} requires a value", arg))
        };

        match arg {
            "--help" | "-h" => return Ok(None),
            "place" => command = Some(Command::Place),
            "low-buy" => command = Some(Command::LowBuy),
            "high-sell" => command = Some(Command::HighSell),
            "custom" => command = Some(Command::Custom),
            "--pair" => {
                let text = value()?;
                parsed.pair = Some(SymbolPair::parse(&text).map_err(|e| e.to_string())?);
            }
            "--symbol" => parsed.symbol = Some(value()?.to_uppercase()),
            "--side" => {
                parsed.side = match value()?.to_lowercase().as_str() {
                    "buy" => Side::Buy,
                    "sell" => Side::Sell,
                    other => return Err(format!("unknown side: {}", other)),
                }
            }
            "--amount" => parsed.amount = Some(value()?),
            "--quote" => parsed.amount_type = AmountType::FixedQuote,
            "--fraction" => parsed.fraction = Some(value()?),
            "--precision" => parsed.precision = parse_precision(&value()?)?,
            "--price" => parsed.price = Some(value()?),
            "--price-precision" => parsed.price_precision = parse_precision(&value()?)?,
            "--live" => parsed.mode = OrderMode::Live,
            "--config" | "-c" => parsed.config_path = Some(PathBuf::from(value()?)),
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    parsed.command = command.ok_or("missing command")?;
    if parsed.pair.is_none() && parsed.symbol.is_none() {
        return Err("one of --pair or --symbol is required".to_string());
    }
    if parsed.amount.is_none() && parsed.fraction.is_none() {
        return Err("one of --amount or --fraction is required".to_string());
    }
    if parsed.fraction.is_some() && parsed.pair.is_none() {
        return Err("--fraction needs --pair to know which balance to read".to_string());
    }
    if parsed.command == Command::Custom && parsed.price.is_none() {
        return Err("custom requires --price".to_string());
    }

    Ok(Some(parsed))
}

fn parse_precision(text: &str) -> Result<u32, String> {
    let places: i64 = text
        .parse()
        .map_err(|_| format!("invalid precision: {}", text))?;
    check_precision(places).map_err(|e| e.to_string())
}

fn run(args: Args) -> Result<u64, OrderError> {
    let config = ExchangeConfig::load(args.config_path.as_deref())?;
    let session = TradingSession::from_config(&config)?;

    let symbol = match (&args.symbol, &args.pair) {
        (Some(symbol), _) => symbol.clone(),
        (None, Some(pair)) => pair.exchange_symbol(),
        (None, None) => return Err(OrderError::InvalidArgument("no symbol".to_string())),
    };

    let (amount_type, amount) = match (&args.fraction, &args.pair) {
        (Some(fraction), Some(pair)) => {
            let fraction = parse_decimal("fraction", fraction)?;
            let calculation = match args.amount_type {
                AmountType::FixedBase => AmountCalculation::FixedBaseFromPercentage(fraction),
                AmountType::FixedQuote => AmountCalculation::FixedQuoteFromPercentage(fraction),
            };
            let sized = session.size_amount(pair, calculation)?;
            info!("Sized order amount: {} ({:?})", sized.amount, sized.amount_type);
            (sized.amount_type, sized.amount)
        }
        _ => (
            args.amount_type,
            args.amount.clone().unwrap_or_default(),
        ),
    };

    let request = OrderRequest::new(symbol, args.side, amount_type, amount, args.precision, args.mode)?;

    let outcome = match args.command {
        Command::Place => session.place_order(&request)?,
        Command::LowBuy => session.low_buy(&request, args.price_precision)?,
        Command::HighSell => session.high_sell(&request, args.price_precision)?,
        Command::Custom => {
            let price = args.price.as_deref().unwrap_or_default();
            session.trade_custom_price(&request, price, args.price_precision)?
        }
    };

    if outcome.is_placed() {
        info!("Order placed: id {}", outcome.order_id());
    } else {
        info!("Test order validated");
    }
    Ok(outcome.order_id())
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    match run(parsed) {
        Ok(order_id) => {
            println!("{}", order_id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{} (error kind {})", e, e.kind().code());
            ExitCode::FAILURE
        }
    }
}
