use icu::plurals::PluralCategory;

use super::UnitDisplay;
use crate::decoration::DecorationFamily;
use crate::text::Field;

struct UnitNames {
    id: &'static str,
    long: (&'static str, &'static str),
    short: (&'static str, &'static str),
    narrow: &'static str,
}

const fn unit(
    id: &'static str,
    long: (&'static str, &'static str),
    short: (&'static str, &'static str),
    narrow: &'static str,
) -> UnitNames {
    UnitNames {
        id,
        long,
        short,
        narrow,
    }
}

// English names. Long and short entries are (one, other).
static UNITS: &[UnitNames] = &[
    unit("acre", (" acre", " acres"), (" ac", " ac"), "ac"),
    unit("bit", (" bit", " bits"), (" bit", " bit"), "bit"),
    unit("byte", (" byte", " bytes"), (" byte", " byte"), "B"),
    unit("celsius", (" degree Celsius", " degrees Celsius"), ("\u{00B0}C", "\u{00B0}C"), "\u{00B0}C"),
    unit("centimeter", (" centimeter", " centimeters"), (" cm", " cm"), "cm"),
    unit("day", (" day", " days"), (" day", " days"), "d"),
    unit("degree", (" degree", " degrees"), (" deg", " deg"), "\u{00B0}"),
    unit("fahrenheit", (" degree Fahrenheit", " degrees Fahrenheit"), ("\u{00B0}F", "\u{00B0}F"), "\u{00B0}"),
    unit("fluid-ounce", (" fluid ounce", " fluid ounces"), (" fl oz", " fl oz"), "fl oz"),
    unit("foot", (" foot", " feet"), (" ft", " ft"), "\u{2032}"),
    unit("gallon", (" gallon", " gallons"), (" gal", " gal"), "gal"),
    unit("gigabyte", (" gigabyte", " gigabytes"), (" GB", " GB"), "GB"),
    unit("gram", (" gram", " grams"), (" g", " g"), "g"),
    unit("hectare", (" hectare", " hectares"), (" ha", " ha"), "ha"),
    unit("hour", (" hour", " hours"), (" hr", " hr"), "h"),
    unit("inch", (" inch", " inches"), (" in", " in"), "\u{2033}"),
    unit("kilobyte", (" kilobyte", " kilobytes"), (" kB", " kB"), "kB"),
    unit("kilogram", (" kilogram", " kilograms"), (" kg", " kg"), "kg"),
    unit("kilometer", (" kilometer", " kilometers"), (" km", " km"), "km"),
    unit("liter", (" liter", " liters"), (" L", " L"), "L"),
    unit("megabyte", (" megabyte", " megabytes"), (" MB", " MB"), "MB"),
    unit("meter", (" meter", " meters"), (" m", " m"), "m"),
    unit("mile", (" mile", " miles"), (" mi", " mi"), "mi"),
    unit("milliliter", (" milliliter", " milliliters"), (" mL", " mL"), "mL"),
    unit("millimeter", (" millimeter", " millimeters"), (" mm", " mm"), "mm"),
    unit("millisecond", (" millisecond", " milliseconds"), (" ms", " ms"), "ms"),
    unit("minute", (" minute", " minutes"), (" min", " min"), "m"),
    unit("month", (" month", " months"), (" mth", " mths"), "m"),
    unit("ounce", (" ounce", " ounces"), (" oz", " oz"), "oz"),
    unit("percent", (" percent", " percent"), ("%", "%"), "%"),
    unit("pound", (" pound", " pounds"), (" lb", " lb"), "lb"),
    unit("second", (" second", " seconds"), (" sec", " sec"), "s"),
    unit("stone", (" stone", " stones"), (" st", " st"), "st"),
    unit("terabyte", (" terabyte", " terabytes"), (" TB", " TB"), "TB"),
    unit("week", (" week", " weeks"), (" wk", " wks"), "w"),
    unit("yard", (" yard", " yards"), (" yd", " yd"), "yd"),
    unit("year", (" year", " years"), (" yr", " yrs"), "y"),
];

/// The unit's names as a plural family, or `None` for an unknown unit.
pub(super) fn unit_family(id: &str, display: UnitDisplay) -> Option<DecorationFamily> {
    let names = UNITS.iter().find(|u| u.id == id)?;
    let (one, other) = match display {
        UnitDisplay::Long => names.long,
        UnitDisplay::Short => names.short,
        UnitDisplay::Narrow => (names.narrow, names.narrow),
    };
    Some(
        DecorationFamily::new(format!("{id}-{display:?}"))
            .with_form(PluralCategory::One, "", one, Field::MeasureUnit)
            .with_form(PluralCategory::Other, "", other, Field::MeasureUnit),
    )
}
