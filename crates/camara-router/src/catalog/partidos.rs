//! Partidos: partidos políticos, seus membros e lideranças.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/partidos",
        upstream_path: "partidos",
        category: "Partidos",
        description: "Retorna uma lista de partidos políticos que têm ou já tiveram deputados.",
        path_params: &[],
        query_params: &[
            QueryParam::text("sigla"),
            QueryParam::text("dataInicio"),
            QueryParam::text("dataFim"),
        ],
    },
    Route {
        path: "/partidos/{id}",
        upstream_path: "partidos/{id}",
        category: "Partidos",
        description: "Retorna informações detalhadas sobre um partido.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/partidos/{id}/membros",
        upstream_path: "partidos/{id}/membros",
        category: "Partidos",
        description: "Retorna uma lista de deputados membros de um partido.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
    Route {
        path: "/partidos/{id}/lideres",
        upstream_path: "partidos/{id}/lideres",
        category: "Partidos",
        description: "Lista de líderes e vice-líderes de um partido.",
        path_params: &[PathParam::int("id")],
        query_params: &[],
    },
];
