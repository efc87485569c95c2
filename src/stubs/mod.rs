//! Bundled Blade stub templates
//!
//! Each stub contains the two placeholder tokens the generator substitutes:
//! `{{ tables }}` becomes the plural table name and `{{ table }}` the
//! singular model name. A project can shadow any of these with its own file
//! at `<base-path>/stubs/<kind>.blade.stub`.

/// Placeholder replaced with the singular model name (e.g. `example`).
pub const TABLE_TOKEN: &str = "{{ table }}";

/// Placeholder replaced with the plural table name (e.g. `examples`).
pub const TABLES_TOKEN: &str = "{{ tables }}";

/// Default stub for `index.blade.php`
pub const INDEX_STUB: &str = r#"@extends('adminlte::page')

@section('title', '{{ tables }}')

@section('content_header')
    <h1 class="text-capitalize">{{ tables }}</h1>
@stop

@section('content')
    <div class="card">
        <div class="card-header">
            <a href="{{ route('{{ tables }}.create') }}" class="btn btn-primary float-right">New</a>
        </div>
        <div class="card-body">
            <table class="table table-striped">
                <thead>
                <tr>
                    <th>#</th>
                    <th>Name</th>
                    <th>Created at</th>
                    <th></th>
                </tr>
                </thead>
                <tbody>
                @foreach(${{ tables }} as ${{ table }})
                    <tr>
                        <td>{{ ${{ table }}->id }}</td>
                        <td>{{ ${{ table }}->name }}</td>
                        <td>{{ ${{ table }}->created_at }}</td>
                        <td>
                            <a href="{{ route('{{ tables }}.show', ${{ table }}) }}">Show</a>
                            <a href="{{ route('{{ tables }}.edit', ${{ table }}) }}">Edit</a>
                        </td>
                    </tr>
                @endforeach
                </tbody>
            </table>
        </div>
    </div>
@stop
"#;

/// Default stub for `show.blade.php`
pub const SHOW_STUB: &str = r#"@extends('adminlte::page')

@section('title', 'Show {{ table }}')

@section('content_header')
    <h1 class="text-capitalize">Show {{ table }}</h1>
@stop

@section('content')
    <div class="card">
        <div class="card-body">
            <dl class="row">
                <dt class="col-sm-2">#</dt>
                <dd class="col-sm-10">{{ ${{ table }}->id }}</dd>

                <dt class="col-sm-2">Name</dt>
                <dd class="col-sm-10">{{ ${{ table }}->name }}</dd>

                <dt class="col-sm-2">Created at</dt>
                <dd class="col-sm-10">{{ ${{ table }}->created_at }}</dd>
            </dl>
        </div>
        <div class="card-footer">
            <a href="{{ route('{{ tables }}.edit', ${{ table }}) }}" class="btn btn-secondary">Edit</a>
            <a href="{{ route('{{ tables }}.index') }}" class="btn btn-link">Back</a>
        </div>
    </div>
@stop
"#;

/// Default stub for `create.blade.php`
pub const CREATE_STUB: &str = r#"@extends('adminlte::page')

@section('title', 'Create {{ table }}')

@section('content_header')
    <h1 class="text-capitalize">Create {{ table }}</h1>
@stop

@section('content')
    <div class="card">
        <form method="POST" action="{{ route('{{ tables }}.store') }}">
            @csrf
            <div class="card-body">
                <div class="form-group">
                    <label for="name">Name</label>
                    <input type="text" name="name" id="name" class="form-control" value="{{ old('name') }}">
                </div>
            </div>
            <div class="card-footer">
                <button type="submit" class="btn btn-primary">Save</button>
                <a href="{{ route('{{ tables }}.index') }}" class="btn btn-link">Cancel</a>
            </div>
        </form>
    </div>
@stop
"#;

/// Default stub for `edit.blade.php`
pub const EDIT_STUB: &str = r#"@extends('adminlte::page')

@section('title', 'Edit {{ table }}')

@section('content_header')
    <h1 class="text-capitalize">Edit {{ table }}</h1>
@stop

@section('content')
    <div class="card">
        <form method="POST" action="{{ route('{{ tables }}.update', ${{ table }}) }}">
            @csrf
            @method('PUT')
            <div class="card-body">
                <div class="form-group">
                    <label for="name">Name</label>
                    <input type="text" name="name" id="name" class="form-control" value="{{ old('name', ${{ table }}->name) }}">
                </div>
            </div>
            <div class="card-footer">
                <button type="submit" class="btn btn-primary">Update</button>
                <a href="{{ route('{{ tables }}.show', ${{ table }}) }}" class="btn btn-link">Cancel</a>
            </div>
        </form>
    </div>
@stop
"#;
