//! Built-in message tables.

use crate::localization::Language;

const ENGLISH: &[(&str, &str)] = &[
    ("MissingName", "Please enter a name"),
    ("MissingPrice", "Please enter a price"),
    ("PriceNotANumber", "The value entered for the price must be a number"),
    ("PriceNotGreaterThanZero", "The price must be greater than zero"),
    ("MissingQuantity", "Please enter a stock value"),
    ("StockNotAnInteger", "The value entered for the stock must be an integer"),
    ("StockNotGreaterThanZero", "The stock must be greater than zero"),
    ("ErrorMissingName", "Please enter your name"),
    ("ErrorMissingAddress", "Please enter an address"),
    ("ErrorMissingCity", "Please enter a city"),
    ("ErrorMissingZipCode", "Please enter a zip code"),
    ("ErrorMissingCountry", "Please enter a country"),
];

const FRENCH: &[(&str, &str)] = &[
    ("MissingName", "Veuillez saisir un nom"),
    ("MissingPrice", "Veuillez saisir un prix"),
    ("PriceNotANumber", "La valeur saisie pour le prix doit être un nombre"),
    ("PriceNotGreaterThanZero", "Le prix doit être supérieur à zéro"),
    ("MissingQuantity", "Veuillez saisir une valeur de stock"),
    ("StockNotAnInteger", "La valeur saisie pour le stock doit être un entier"),
    ("StockNotGreaterThanZero", "Le stock doit être supérieur à zéro"),
    ("ErrorMissingName", "Veuillez saisir votre nom"),
    ("ErrorMissingAddress", "Veuillez saisir une adresse"),
    ("ErrorMissingCity", "Veuillez saisir une ville"),
    ("ErrorMissingZipCode", "Veuillez saisir un code postal"),
    ("ErrorMissingCountry", "Veuillez saisir un pays"),
];

const SPANISH: &[(&str, &str)] = &[
    ("MissingName", "Por favor, introduzca un nombre"),
    ("MissingPrice", "Por favor, introduzca un precio"),
    ("PriceNotANumber", "El valor introducido para el precio debe ser un número"),
    ("PriceNotGreaterThanZero", "El precio debe ser mayor que cero"),
    ("MissingQuantity", "Por favor, introduzca un valor de stock"),
    ("StockNotAnInteger", "El valor introducido para el stock debe ser un número entero"),
    ("StockNotGreaterThanZero", "El stock debe ser mayor que cero"),
    ("ErrorMissingName", "Por favor, introduzca su nombre"),
    ("ErrorMissingAddress", "Por favor, introduzca una dirección"),
    ("ErrorMissingCity", "Por favor, introduzca una ciudad"),
    ("ErrorMissingZipCode", "Por favor, introduzca un código postal"),
    ("ErrorMissingCountry", "Por favor, introduzca un país"),
];

pub(super) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let table = match language {
        Language::English => ENGLISH,
        Language::French => FRENCH,
        Language::Spanish => SPANISH,
    };

    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, message)| *message)
}
